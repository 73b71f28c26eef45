use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::user::UserContext;

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Returns the authenticated caller's profile.
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_user_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
) -> Result<Response, Response> {
    let user = db_client::users::get_user(&ctx.db, &user_context.user_id)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let Some(user) = user else {
        // Session outlived the row
        return Err(error_response(
            locale,
            ApiError::not_found(ErrorCode::NotFound),
        ));
    };

    Ok(Json(user).into_response())
}
