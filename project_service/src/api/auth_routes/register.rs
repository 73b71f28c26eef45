use axum::{
    Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::response::ErrorBody;
use model::user::{User, request::RegisterRequest};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Creates a new account. Session issuance stays on the login route.
#[utoipa::path(
        post,
        path = "/auth/register",
        request_body = RegisterRequest,
        responses(
            (status = 201, body = User),
            (status = 400, body = ErrorBody),
            (status = 500, body = ErrorBody),
        )
    )]
#[tracing::instrument(skip(ctx, req), fields(email=?req.email))]
pub async fn register_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    extract::Json(req): extract::Json<RegisterRequest>,
) -> Result<Response, Response> {
    let (name, email, password) = match (
        req.name.as_deref().map(str::trim),
        req.email.as_deref().map(str::trim),
        req.password.as_deref(),
    ) {
        (Some(name), Some(email), Some(password))
            if !name.is_empty() && !email.is_empty() && !password.is_empty() =>
        {
            (name, email, password)
        }
        _ => {
            return Err(error_response(
                locale,
                ApiError::bad_request(ErrorCode::RegisterFieldsRequired),
            ));
        }
    };

    if password.len() < 8 {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::RegisterPasswordMin),
        ));
    }

    let email_in_use = db_client::users::email_exists(&ctx.db, email)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    if email_in_use {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::RegisterEmailInUse),
        ));
    }

    let password_hash = auth::password::hash_password(password)
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let user = db_client::users::create_user(&ctx.db, name, email, &password_hash)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}
