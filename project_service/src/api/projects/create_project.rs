use axum::{
    Extension, Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    StringId, project::request::CreateProjectRequest, response::ErrorBody, user::UserContext,
};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Creates a project; the creator becomes its OWNER.
#[utoipa::path(
        post,
        path = "/projects",
        request_body = CreateProjectRequest,
        responses(
            (status = 201, body = StringId),
            (status = 400, body = ErrorBody),
            (status = 401, body = ErrorBody),
            (status = 500, body = ErrorBody),
        )
    )]
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn create_project_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    extract::Json(req): extract::Json<CreateProjectRequest>,
) -> Result<Response, Response> {
    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::ProjectNameRequired),
        ));
    }

    let project_id =
        db_client::projects::create_project(&ctx.db, &user_context.user_id, name, &req)
            .await
            .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((StatusCode::CREATED, Json(StringId { id: project_id })).into_response())
}
