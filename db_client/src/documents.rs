use model::document::{Document, DocumentEvent, DocumentStatus, DocumentSummary, InvalidTransition};
use sqlx::PgPool;

/// Failure modes of a guarded status transition.
#[derive(thiserror::Error, Debug)]
pub enum AdvanceError {
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Invalid(#[from] InvalidTransition),
    /// The row's status changed between the read and the guarded update
    /// (another caller won the race).
    #[error("document status changed concurrently")]
    Conflict,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Creates the document in `UPLOADED` with placeholder storage fields; the
/// upload-url issuer backfills them once the object key is derived.
#[tracing::instrument(skip(db))]
pub async fn create_document(
    db: &PgPool,
    project_id: &str,
    user_id: &str,
    filename: &str,
    mime_type: &str,
    size_bytes: Option<i64>,
) -> anyhow::Result<String> {
    let document_id = crate::new_id();

    sqlx::query(
        r#"
        INSERT INTO documents
            (id, project_id, created_by, filename, mime_type, size_bytes,
             storage_bucket, storage_key, storage_uri, status)
        VALUES ($1, $2, $3, $4, $5, $6, '', '', '', 'UPLOADED')
        "#,
    )
    .bind(&document_id)
    .bind(project_id)
    .bind(user_id)
    .bind(filename)
    .bind(mime_type)
    .bind(size_bytes)
    .execute(db)
    .await?;

    Ok(document_id)
}

#[tracing::instrument(skip(db))]
pub async fn set_storage_location(
    db: &PgPool,
    document_id: &str,
    bucket: &str,
    key: &str,
    uri: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE documents
        SET storage_bucket = $2, storage_key = $3, storage_uri = $4
        WHERE id = $1
        "#,
    )
    .bind(document_id)
    .bind(bucket)
    .bind(key)
    .bind(uri)
    .execute(db)
    .await?;

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn get_document(db: &PgPool, document_id: &str) -> anyhow::Result<Option<Document>> {
    let document = sqlx::query_as::<_, Document>(
        r#"
        SELECT id, project_id, created_by, filename, mime_type, size_bytes,
               storage_bucket, storage_key, storage_uri, status,
               extracted_text, extracted_data, processed_at, error_message,
               created_at
        FROM documents
        WHERE id = $1
        "#,
    )
    .bind(document_id)
    .fetch_optional(db)
    .await?;

    Ok(document)
}

/// Latest 50 documents of a project, optionally filtered by a substring of
/// the filename or the extracted text.
#[tracing::instrument(skip(db))]
pub async fn list_documents(
    db: &PgPool,
    project_id: &str,
    query: Option<&str>,
) -> anyhow::Result<Vec<DocumentSummary>> {
    let documents = sqlx::query_as::<_, DocumentSummary>(
        r#"
        SELECT id, project_id, filename, mime_type, size_bytes, status,
               processed_at, created_at, storage_bucket, storage_key,
               storage_uri
        FROM documents
        WHERE project_id = $1
          AND ($2::TEXT IS NULL
               OR filename ILIKE '%' || $2 || '%'
               OR extracted_text ILIKE '%' || $2 || '%')
        ORDER BY created_at DESC
        LIMIT 50
        "#,
    )
    .bind(project_id)
    .bind(query)
    .fetch_all(db)
    .await?;

    Ok(documents)
}

/// Moves the document into `PROCESSING` (from `UPLOADED` or a `FAILED`
/// retry), clearing any previous error.
#[tracing::instrument(skip(db))]
pub async fn begin_processing(db: &PgPool, document_id: &str) -> Result<DocumentStatus, AdvanceError> {
    let current = current_status(db, document_id).await?;
    let next = current.advance(DocumentEvent::Enqueue)?;

    let result = sqlx::query(
        r#"
        UPDATE documents
        SET status = $3, error_message = NULL
        WHERE id = $1 AND status = $2
        "#,
    )
    .bind(document_id)
    .bind(current)
    .bind(next)
    .execute(db)
    .await?;

    guard_rows_affected(result.rows_affected())?;
    Ok(next)
}

/// Persists the extraction result and moves `PROCESSING -> PROCESSED`.
#[tracing::instrument(skip(db, extracted_text, extracted_data))]
pub async fn complete_processing(
    db: &PgPool,
    document_id: &str,
    extracted_text: &str,
    extracted_data: &serde_json::Value,
) -> Result<DocumentStatus, AdvanceError> {
    let current = current_status(db, document_id).await?;
    let next = current.advance(DocumentEvent::Complete)?;

    let result = sqlx::query(
        r#"
        UPDATE documents
        SET status = $3,
            extracted_text = $4,
            extracted_data = $5,
            processed_at = now(),
            error_message = NULL
        WHERE id = $1 AND status = $2
        "#,
    )
    .bind(document_id)
    .bind(current)
    .bind(next)
    .bind(extracted_text)
    .bind(extracted_data)
    .execute(db)
    .await?;

    guard_rows_affected(result.rows_affected())?;
    Ok(next)
}

/// Compensating transition `PROCESSING -> FAILED`, recording the error
/// string.
#[tracing::instrument(skip(db, error_message))]
pub async fn fail_processing(
    db: &PgPool,
    document_id: &str,
    error_message: &str,
) -> Result<DocumentStatus, AdvanceError> {
    let current = current_status(db, document_id).await?;
    let next = current.advance(DocumentEvent::Fail)?;

    let result = sqlx::query(
        r#"
        UPDATE documents
        SET status = $3, error_message = $4
        WHERE id = $1 AND status = $2
        "#,
    )
    .bind(document_id)
    .bind(current)
    .bind(next)
    .bind(error_message)
    .execute(db)
    .await?;

    guard_rows_affected(result.rows_affected())?;
    Ok(next)
}

async fn current_status(db: &PgPool, document_id: &str) -> Result<DocumentStatus, AdvanceError> {
    sqlx::query_scalar::<_, DocumentStatus>(r#"SELECT status FROM documents WHERE id = $1"#)
        .bind(document_id)
        .fetch_optional(db)
        .await?
        .ok_or(AdvanceError::NotFound)
}

fn guard_rows_affected(rows: u64) -> Result<(), AdvanceError> {
    if rows == 0 {
        return Err(AdvanceError::Conflict);
    }
    Ok(())
}
