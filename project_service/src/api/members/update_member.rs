use axum::{
    Extension, Json,
    extract::{self, Path, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    project::{ProjectRole, request::UpdateMemberRequest},
    response::OkResponse,
    user::UserContext,
};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn update_member_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path((project_id, member_user_id)): Path<(String, String)>,
    extract::Json(req): extract::Json<UpdateMemberRequest>,
) -> Result<Response, Response> {
    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let Some(role) = req.role.as_deref() else {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::MemberRoleRequired),
        ));
    };

    let role = ProjectRole::parse(role).ok_or_else(|| {
        error_response(locale, ApiError::bad_request(ErrorCode::MemberInvalidRole))
    })?;

    db_client::members::update_member_role(&ctx.db, &project_id, &member_user_id, role)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
