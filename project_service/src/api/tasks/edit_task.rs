use axum::{
    Extension, Json,
    extract::{self, Path, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{response::OkResponse, task::request::UpdateTaskRequest, user::UserContext};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

/// Permission is checked against the task's owning project.
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn edit_task_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(task_id): Path<String>,
    extract::Json(req): extract::Json<UpdateTaskRequest>,
) -> Result<Response, Response> {
    let project_id = db_client::tasks::get_task_project_id(&ctx.db, &task_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?
        .ok_or_else(|| error_response(locale, ApiError::not_found(ErrorCode::NotFound)))?;

    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    db_client::tasks::update_task(&ctx.db, &task_id, &req)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
