use axum::{
    Extension, Json,
    extract::{self, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::{response::OkResponse, user::UserContext, user::request::UpdateUserRequest};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Partial profile update; absent fields are left untouched.
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn update_user_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    extract::Json(req): extract::Json<UpdateUserRequest>,
) -> Result<Response, Response> {
    db_client::users::update_user(
        &ctx.db,
        &user_context.user_id,
        req.name.as_deref(),
        req.image.as_deref(),
    )
    .await
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
