use axum::{
    Extension, Json,
    extract::{self, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    document::{
        build_document_object_key,
        request::UploadUrlRequest,
        response::{StorageLocation, UploadTarget, UploadUrlResponse},
    },
    response::ErrorBody,
    user::UserContext,
};

use crate::api::{
    context::ApiContext,
    extractors::RequestLocale,
    util::{ensure_can_view, error_response},
};

/// Creates the document row in `UPLOADED`, derives its object key and hands
/// the client a presigned PUT url. The client uploads the bytes directly to
/// the bucket and then calls the enqueue endpoint.
#[utoipa::path(
    post,
    path = "/projects/{project_id}/documents/upload-url",
    params(("project_id" = String, Path, description = "Project id")),
    request_body = UploadUrlRequest,
    responses(
        (status = 201, description = "Document created, upload target issued", body = UploadUrlResponse),
        (status = 400, description = "Missing filename or content type", body = ErrorBody),
        (status = 403, description = "Not a member of the project", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "documents",
)]
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn create_upload_url_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Path(project_id): Path<String>,
    extract::Json(req): extract::Json<UploadUrlRequest>,
) -> Result<Response, Response> {
    ensure_can_view(&ctx.db, &project_id, &user_context)
        .await
        .map_err(|e| error_response(locale, e))?;

    let filename = req.filename.as_deref().map(str::trim).unwrap_or_default();
    if filename.is_empty() {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::DocumentFilenameRequired),
        ));
    }
    let content_type = req
        .content_type
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if content_type.is_empty() {
        return Err(error_response(
            locale,
            ApiError::bad_request(ErrorCode::DocumentContentTypeRequired),
        ));
    }

    let document_id = db_client::documents::create_document(
        &ctx.db,
        &project_id,
        &user_context.user_id,
        filename,
        content_type,
        req.size_bytes,
    )
    .await
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let object_key = build_document_object_key(&project_id, &document_id, filename);
    let bucket = ctx.s3_client.document_bucket().to_string();
    let uri = s3_client::object_uri(&bucket, &object_key);

    db_client::documents::set_storage_location(&ctx.db, &document_id, &bucket, &object_key, &uri)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let upload = ctx
        .s3_client
        .put_presigned_upload(
            &object_key,
            content_type,
            ctx.config.presigned_url_expiry_seconds,
        )
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((
        StatusCode::CREATED,
        Json(UploadUrlResponse {
            document_id,
            upload: UploadTarget {
                url: upload.url,
                headers: upload.headers,
                expires_at: upload.expires_at,
            },
            storage: StorageLocation {
                bucket,
                object_key,
                uri,
            },
        }),
    )
        .into_response())
}
