use axum::{
    Extension, Json,
    extract::{self, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    project::{ProjectRole, request::AddMemberRequest},
    response::OkResponse,
    user::UserContext,
};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

/// Adds a member by user id or email. The role defaults to MEMBER; unknown
/// role strings are a validation error, not a deserialize rejection.
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn add_member_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
    extract::Json(req): extract::Json<AddMemberRequest>,
) -> Result<Response, Response> {
    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let role = match req.role.as_deref() {
        None => ProjectRole::Member,
        Some(value) => ProjectRole::parse(value).ok_or_else(|| {
            error_response(locale, ApiError::bad_request(ErrorCode::MemberInvalidRole))
        })?,
    };

    let member_user_id = match (req.user_id, req.email) {
        (Some(user_id), _) => user_id,
        (None, Some(email)) => {
            let user = db_client::users::get_user_by_email(&ctx.db, &email)
                .await
                .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

            match user {
                Some(user) => user.id,
                None => {
                    return Err(error_response(
                        locale,
                        ApiError::not_found(ErrorCode::NotFound),
                    ));
                }
            }
        }
        (None, None) => {
            return Err(error_response(
                locale,
                ApiError::bad_request(ErrorCode::MemberIdentifierRequired),
            ));
        }
    };

    db_client::members::add_member(&ctx.db, &project_id, &member_user_id, role)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((StatusCode::CREATED, Json(OkResponse::ok())).into_response())
}
