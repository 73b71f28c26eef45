use axum::{Router, routing::post};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_upload_url;
pub(in crate::api) mod enqueue_document;
pub(in crate::api) mod get_documents;
pub(in crate::api) mod process_document;

/// Routes addressing a document directly; listing and upload-url issuance
/// live under the owning project in the projects router.
pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/:document_id/enqueue", post(enqueue_document::enqueue_document_handler))
        .route("/:document_id/process", post(process_document::process_document_handler))
}
