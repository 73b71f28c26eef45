use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::{response::OkResponse, user::UserContext};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn remove_member_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path((project_id, member_user_id)): Path<(String, String)>,
) -> Result<Response, Response> {
    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    db_client::members::remove_member(&ctx.db, &project_id, &member_user_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
