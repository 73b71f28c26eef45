use axum::{
    Json,
    extract::{self, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::response::ErrorBody;
use model::user::{request::LoginRequest, response::LoginResponse};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Verifies credentials and issues a bearer session token. Bad email and
/// bad password are indistinguishable on the wire.
#[utoipa::path(
        post,
        path = "/auth/login",
        request_body = LoginRequest,
        responses(
            (status = 200, body = LoginResponse),
            (status = 401, body = ErrorBody),
            (status = 500, body = ErrorBody),
        )
    )]
#[tracing::instrument(skip(ctx, req), fields(email=?req.email))]
pub async fn login_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    extract::Json(req): extract::Json<LoginRequest>,
) -> Result<Response, Response> {
    let (Some(email), Some(password)) = (req.email.as_deref(), req.password.as_deref()) else {
        return Err(error_response(locale, ApiError::Unauthorized));
    };

    let user = db_client::users::get_user_by_email(&ctx.db, email)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let Some(user) = user else {
        tracing::trace!("login attempt for unknown email");
        return Err(error_response(locale, ApiError::Unauthorized));
    };

    if !auth::password::verify_password(password, &user.password_hash) {
        tracing::trace!("login attempt with wrong password");
        return Err(error_response(locale, ApiError::Unauthorized));
    }

    let token = auth::session::encode_session_token(
        &ctx.config.session_jwt_secret,
        &user.id,
        &user.email,
        user.role.as_str(),
    )
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let user = model::user::User {
        id: user.id,
        email: user.email,
        name: user.name,
        image: user.image,
        role: user.role,
    };

    Ok(Json(LoginResponse { token, user }).into_response())
}
