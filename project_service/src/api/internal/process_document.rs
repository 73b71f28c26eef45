use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use model::response::{ErrorBody, OkResponse};

use crate::{
    api::{context::ApiContext, extractors::RequestLocale, util::error_response},
    service,
};

/// Queue-callback front-end to the extraction operation. The worker deletes
/// the message only on a 2xx from here, so any error body doubles as a
/// redelivery signal.
#[utoipa::path(
    post,
    path = "/internal/documents/{document_id}/process",
    params(("document_id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "Extraction finished or was already done", body = OkResponse),
        (status = 401, description = "Missing or invalid callback token", body = ErrorBody),
        (status = 500, description = "Extraction failed, document marked FAILED", body = ErrorBody),
    ),
    tag = "internal",
)]
#[tracing::instrument(skip(ctx))]
pub async fn process_document_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Path(document_id): Path<String>,
) -> Result<Response, Response> {
    service::ocr::process_document(&ctx.db, ctx.textract_client.as_ref(), &document_id)
        .await
        .map_err(|e| error_response(locale, e))?;

    Ok(Json(OkResponse::ok()).into_response())
}
