use axum::async_trait;
use client_errors::{ApiError, ErrorCode};
use db_client::documents::AdvanceError;
use model::{document::DocumentStatus, project::request::CreateProjectRequest};
use project_service::service::ocr::{self, ExtractText};
use sqlx::PgPool;
use textract_client::ExtractedText;

struct StaticText(&'static str);

#[async_trait]
impl ExtractText for StaticText {
    async fn extract_text(&self, _bucket: &str, _key: &str) -> anyhow::Result<ExtractedText> {
        Ok(ExtractedText {
            text: self.0.to_string(),
            raw: serde_json::json!({ "blocks": [] }),
        })
    }
}

struct BrokenBackend;

#[async_trait]
impl ExtractText for BrokenBackend {
    async fn extract_text(&self, _bucket: &str, _key: &str) -> anyhow::Result<ExtractedText> {
        anyhow::bail!("textract unavailable")
    }
}

/// Seeds a user, a project owned by them and one uploaded document with its
/// storage location already backfilled.
async fn seed_document(pool: &PgPool) -> anyhow::Result<String> {
    let user =
        db_client::users::create_user(pool, "Worker Test", "worker@example.com", "not-a-hash")
            .await?;
    let project_id = db_client::projects::create_project(
        pool,
        &user.id,
        "OCR project",
        &CreateProjectRequest {
            name: Some("OCR project".to_string()),
            description: None,
            budget: None,
            start_date: None,
            end_date: None,
        },
    )
    .await?;

    let document_id = db_client::documents::create_document(
        pool,
        &project_id,
        &user.id,
        "invoice.pdf",
        "application/pdf",
        Some(1024),
    )
    .await?;
    db_client::documents::set_storage_location(
        pool,
        &document_id,
        "uploads",
        "documents/invoice.pdf",
        "s3://uploads/documents/invoice.pdf",
    )
    .await?;

    Ok(document_id)
}

#[sqlx::test(migrations = "../migrations")]
async fn extraction_success_marks_document_processed(pool: PgPool) -> anyhow::Result<()> {
    let document_id = seed_document(&pool).await?;

    let document =
        ocr::process_document(&pool, &StaticText("Total 1,200"), &document_id).await?;
    assert_eq!(document.status, DocumentStatus::Processed);
    assert_eq!(document.extracted_text.as_deref(), Some("Total 1,200"));
    assert!(document.processed_at.is_some());

    let stored = db_client::documents::get_document(&pool, &document_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, DocumentStatus::Processed);
    assert_eq!(stored.extracted_text.as_deref(), Some("Total 1,200"));

    Ok(())
}

#[sqlx::test(migrations = "../migrations")]
async fn processed_documents_are_not_extracted_again(pool: PgPool) -> anyhow::Result<()> {
    let document_id = seed_document(&pool).await?;
    ocr::process_document(&pool, &StaticText("first pass"), &document_id).await?;

    // A duplicate delivery must return the stored result, never re-run OCR.
    let document = ocr::process_document(&pool, &BrokenBackend, &document_id).await?;
    assert_eq!(document.status, DocumentStatus::Processed);
    assert_eq!(document.extracted_text.as_deref(), Some("first pass"));

    Ok(())
}

#[sqlx::test(migrations = "../migrations")]
async fn extraction_failure_marks_document_failed(pool: PgPool) -> anyhow::Result<()> {
    let document_id = seed_document(&pool).await?;

    let err = ocr::process_document(&pool, &BrokenBackend, &document_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Failed {
            code: ErrorCode::DocumentProcessFailed
        }
    ));

    let stored = db_client::documents::get_document(&pool, &document_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, DocumentStatus::Failed);
    assert_eq!(stored.error_message.as_deref(), Some("textract unavailable"));
    assert!(stored.extracted_text.is_none());

    Ok(())
}

#[sqlx::test(migrations = "../migrations")]
async fn failed_documents_can_be_retried(pool: PgPool) -> anyhow::Result<()> {
    let document_id = seed_document(&pool).await?;
    let _ = ocr::process_document(&pool, &BrokenBackend, &document_id).await;

    let document = ocr::process_document(&pool, &StaticText("second try"), &document_id).await?;
    assert_eq!(document.status, DocumentStatus::Processed);
    assert_eq!(document.extracted_text.as_deref(), Some("second try"));
    assert!(document.error_message.is_none());

    Ok(())
}

#[sqlx::test(migrations = "../migrations")]
async fn second_enqueue_of_a_processing_document_conflicts(pool: PgPool) -> anyhow::Result<()> {
    let document_id = seed_document(&pool).await?;

    let status = db_client::documents::begin_processing(&pool, &document_id).await?;
    assert_eq!(status, DocumentStatus::Processing);

    let err = db_client::documents::begin_processing(&pool, &document_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AdvanceError::Invalid(_)));

    Ok(())
}
