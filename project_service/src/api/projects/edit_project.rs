use axum::{
    Extension, Json,
    extract::{self, Path, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::{project::request::UpdateProjectRequest, response::OkResponse, user::UserContext};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_manage, error_response},
};

#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn edit_project_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
    extract::Json(req): extract::Json<UpdateProjectRequest>,
) -> Result<Response, Response> {
    ensure_can_manage(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    db_client::projects::update_project(&ctx.db, &project_id, &req)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(OkResponse::ok()).into_response())
}
