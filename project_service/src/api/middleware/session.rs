use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use client_errors::ApiError;
use model::user::{GlobalRole, UserContext};

use crate::api::{context::ApiContext, extractors::locale_from_headers, util::error_response};

/// Decodes the session token and attaches the [`UserContext`] to the
/// request. Every route behind this middleware requires authentication.
pub async fn handler(
    State(ctx): State<ApiContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let locale = locale_from_headers(req.headers());

    let Some(token) = super::extract_bearer_token(req.headers()) else {
        tracing::trace!("no bearer token on request");
        return Err(error_response(locale, ApiError::Unauthorized));
    };

    let claims = auth::session::validate_session_token(token, &ctx.config.session_jwt_secret)
        .map_err(|e| {
            tracing::trace!(error=?e, "session token rejected");
            error_response(locale, ApiError::Unauthorized)
        })?;

    let role = match claims.role.as_str() {
        "ADMIN" => GlobalRole::Admin,
        _ => GlobalRole::User,
    };

    req.extensions_mut().insert(UserContext {
        user_id: claims.sub,
        role,
    });

    Ok(next.run(req).await)
}
