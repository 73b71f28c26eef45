use anyhow::Context;
use axum::Router;
use context::ApiContext;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Utilities
pub mod context;
pub mod extractors;
pub mod middleware;
pub mod util;

// Routes
mod auth_routes;
mod documents;
mod financial;
mod health;
mod internal;
mod members;
mod milestones;
mod projects;
mod tasks;
mod user;

mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let cors = CorsLayer::permissive();

    let app = api_router(state.clone())
        .layer(cors.clone())
        .layer(TraceLayer::new_for_http())
        // The health router is attached here so we don't attach the logging middleware to it
        .merge(health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", state.config.port))
        .await
        .context("could not bind listener")?;
    tracing::info!(
        "project service is up and running with environment {:?} on port {}",
        &state.config.environment,
        &state.config.port
    );
    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

pub fn api_router(state: ApiContext) -> Router {
    let session = axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::session::handler,
    );

    Router::new()
        .nest("/auth", auth_routes::router())
        .nest("/user", user::router().layer(session.clone()))
        .nest("/projects", projects::router().layer(session.clone()))
        .nest("/tasks", tasks::router().layer(session.clone()))
        .nest("/milestones", milestones::router().layer(session.clone()))
        .nest("/financial", financial::router().layer(session.clone()))
        .nest("/documents", documents::router().layer(session))
        .nest(
            "/internal",
            internal::router().layer(axum::middleware::from_fn_with_state(
                state.clone(),
                middleware::callback::handler,
            )),
        )
        .with_state(state)
}
