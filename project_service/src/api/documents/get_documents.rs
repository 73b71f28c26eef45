use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::{document::DocumentSummary, response::ErrorBody, user::UserContext};
use serde::Deserialize;

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_view, error_response},
};

#[derive(Deserialize, Debug)]
pub struct DocumentListQuery {
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/documents",
    params(
        ("project_id" = String, Path, description = "Project id"),
        ("q" = Option<String>, Query, description = "Substring filter over filename and extracted text"),
    ),
    responses(
        (status = 200, description = "Documents of the project, newest first", body = [DocumentSummary]),
        (status = 403, description = "Not a member of the project", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "documents",
)]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_documents_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Response, Response> {
    ensure_can_view(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let documents = db_client::documents::list_documents(&ctx.db, &project_id, q)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(documents).into_response())
}
