use axum::{Router, routing::post};

use crate::api::context::ApiContext;

pub(in crate::api) mod process_document;

/// Queue-callback surface; gated by the OIDC callback middleware in the
/// top-level router.
pub fn router() -> Router<ApiContext> {
    Router::new().route(
        "/documents/:document_id/process",
        post(process_document::process_document_handler),
    )
}
