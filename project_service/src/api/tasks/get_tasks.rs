use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::user::UserContext;

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_view, error_response},
};

#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_tasks_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
) -> Result<Response, Response> {
    ensure_can_view(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let tasks = db_client::tasks::list_tasks(&ctx.db, &project_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(tasks).into_response())
}
