use axum::{
    Extension, Json,
    extract::{self, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{StringId, milestone::request::CreateMilestoneRequest, user::UserContext};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

/// Title and due date are both required.
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn create_milestone_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
    extract::Json(req): extract::Json<CreateMilestoneRequest>,
) -> Result<Response, Response> {
    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let title = req.title.as_deref().map(str::trim).unwrap_or_default();
    let (title, due_date) = match (title.is_empty(), req.due_date) {
        (false, Some(due_date)) => (title, due_date),
        _ => {
            return Err(error_response(
                locale,
                ApiError::bad_request(ErrorCode::MilestoneRequiredFields),
            ));
        }
    };

    let milestone_id = db_client::milestones::create_milestone(
        &ctx.db,
        &project_id,
        title,
        req.description.as_deref(),
        due_date,
    )
    .await
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((StatusCode::CREATED, Json(StringId { id: milestone_id })).into_response())
}
