use anyhow::Context;
use axum::Router;

use crate::config::Config;

mod health;

/// The worker only exposes a liveness endpoint; all real work comes off the
/// queue.
pub async fn setup_and_serve(config: &Config) -> anyhow::Result<()> {
    let app = Router::new().merge(health::router());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("could not bind listener")?;
    tracing::info!(
        "document ocr worker is up and running with environment {:?} on port {}",
        &config.environment,
        &config.port
    );
    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}
