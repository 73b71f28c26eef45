use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

pub fn router() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Liveness check.
#[utoipa::path(
        get,
        path = "/health",
        responses(
            (status = 200),
        )
    )]
pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}
