use axum::{
    Extension, Json,
    extract::{self, Path, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{response::OkResponse, milestone::request::UpdateMilestoneRequest, user::UserContext};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn edit_milestone_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(milestone_id): Path<String>,
    extract::Json(req): extract::Json<UpdateMilestoneRequest>,
) -> Result<Response, Response> {
    let project_id = db_client::milestones::get_milestone_project_id(&ctx.db, &milestone_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?
        .ok_or_else(|| error_response(locale, ApiError::not_found(ErrorCode::NotFound)))?;

    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    db_client::milestones::update_milestone(&ctx.db, &milestone_id, &req)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
