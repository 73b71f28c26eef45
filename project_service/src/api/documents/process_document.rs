use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{document::Document, response::ErrorBody, user::UserContext};

use crate::{
    api::{
        context::ApiContext,
        extractors::RequestLocale,
        util::{ensure_can_manage, error_response},
    },
    service,
};

/// Interactive front-end to the extraction operation; the queue callback
/// under `/internal` drives the same code path.
#[utoipa::path(
    post,
    path = "/documents/{document_id}/process",
    params(("document_id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document after extraction", body = Document),
        (status = 404, description = "Unknown document", body = ErrorBody),
        (status = 500, description = "Extraction failed, document marked FAILED", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "documents",
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn process_document_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(document_id): Path<String>,
) -> Result<Response, Response> {
    let document = db_client::documents::get_document(&ctx.db, &document_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?
        .ok_or_else(|| error_response(locale, ApiError::not_found(ErrorCode::DocumentNotFound)))?;

    ensure_can_manage(&ctx.db, &document.project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let document = service::ocr::process_document(&ctx.db, ctx.textract_client.as_ref(), &document_id)
        .await
        .map_err(|e| error_response(locale, e))?;

    Ok(Json(document).into_response())
}
