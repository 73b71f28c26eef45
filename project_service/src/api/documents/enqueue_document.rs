use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use db_client::documents::AdvanceError;
use model::{
    document::response::{EnqueueResponse, QueueTaskDescriptor},
    response::ErrorBody,
    user::UserContext,
};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

/// Moves the document into `PROCESSING` before touching the queue so a
/// concurrent second submission gets a 409 instead of a duplicate task.
#[utoipa::path(
    post,
    path = "/documents/{document_id}/enqueue",
    params(("document_id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "Extraction task submitted", body = EnqueueResponse),
        (status = 404, description = "Unknown document", body = ErrorBody),
        (status = 409, description = "Already processing or already processed", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "documents",
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn enqueue_document_handler(
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

    db_client::documents::begin_processing(&ctx.db, &document_id)
        .await
        .map_err(|e| match e {
            AdvanceError::NotFound => {
                error_response(locale, ApiError::not_found(ErrorCode::DocumentNotFound))
            }
            AdvanceError::Invalid(_) | AdvanceError::Conflict => error_response(
                locale,
                ApiError::conflict(ErrorCode::DocumentAlreadyProcessing),
            ),
            AdvanceError::Db(e) => error_response(locale, ApiError::Internal(e.into())),
        })?;

    let message_id = match ctx.sqs_client.enqueue_document_process(&document_id).await {
        Ok(message_id) => message_id,
        Err(e) => {
            // The status already moved to PROCESSING; roll it back so a
            // retry is possible. A failed rollback leaves the document
            // stuck and must be visible in the logs.
            if let Err(comp) =
                db_client::documents::fail_processing(&ctx.db, &document_id, &e.to_string()).await
            {
                tracing::error!(
                    document_id = %document_id,
                    error = %comp,
                    "could not mark document FAILED after enqueue failure"
                );
            }
            return Err(error_response(locale, ApiError::Internal(e)));
        }
    };

    Ok(Json(EnqueueResponse {
        ok: true,
        task: QueueTaskDescriptor { message_id },
    })
    .into_response())
}
