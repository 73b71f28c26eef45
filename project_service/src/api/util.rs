use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, Locale};
use model::{response::ErrorBody, user::UserContext};
use sqlx::PgPool;

/// Maps an [`ApiError`] to the wire response at the handler boundary.
/// Internal errors are logged here so handlers don't have to.
pub fn error_response(locale: Locale, err: ApiError) -> Response {
    if let ApiError::Internal(e) = &err {
        tracing::error!(error=?e, "internal server error");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(ErrorBody {
            error: err.localized_message(locale).to_string(),
            code: err.code().map(|code| code.as_str().to_string()),
        }),
    )
        .into_response()
}

/// Any membership row, or global admin.
#[tracing::instrument(skip(db, user_context), fields(user_id=%user_context.user_id))]
pub async fn ensure_can_view(
    db: &PgPool,
    project_id: &str,
    user_context: &UserContext,
) -> Result<(), ApiError> {
    if user_context.is_admin() {
        return Ok(());
    }

    let role = db_client::members::get_member_role(db, project_id, &user_context.user_id).await?;

    match role {
        Some(_) => Ok(()),
        None => Err(ApiError::Forbidden),
    }
}

/// Membership role OWNER or MANAGER, or global admin.
#[tracing::instrument(skip(db, user_context), fields(user_id=%user_context.user_id))]
pub async fn ensure_can_manage(
    db: &PgPool,
    project_id: &str,
    user_context: &UserContext,
) -> Result<(), ApiError> {
    if user_context.is_admin() {
        return Ok(());
    }

    let role = db_client::members::get_member_role(db, project_id, &user_context.user_id).await?;

    match role {
        Some(role) if role.can_manage() => Ok(()),
        _ => Err(ApiError::Forbidden),
    }
}
