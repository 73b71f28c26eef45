use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use client_errors::ApiError;

use crate::api::{context::ApiContext, extractors::locale_from_headers, util::error_response};

/// Gate for the internal processing routes: requires a bearer token signed
/// with the callback secret for the configured audience. With no audience
/// configured every request is rejected.
pub async fn handler(
    State(ctx): State<ApiContext>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let locale = locale_from_headers(req.headers());

    let Some(token) = super::extract_bearer_token(req.headers()) else {
        tracing::trace!("no bearer token on internal request");
        return Err(error_response(locale, ApiError::Unauthorized));
    };

    let claims = auth::callback::validate_callback_token(
        token,
        &ctx.config.oidc_callback_secret,
        ctx.config.oidc_callback_audience.as_deref(),
    )
    .map_err(|e| {
        tracing::warn!(error=?e, "callback token rejected");
        error_response(locale, ApiError::Unauthorized)
    })?;

    tracing::trace!(service_account=%claims.sub, "internal caller verified");

    Ok(next.run(req).await)
}
