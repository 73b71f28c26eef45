use axum::async_trait;
use client_errors::{ApiError, ErrorCode};
use db_client::documents::AdvanceError;
use model::document::{Document, DocumentStatus};
use sqlx::PgPool;
use textract_client::{ExtractedText, Textract};

/// The OCR backend behind [`process_document`]. `Textract` is the
/// production implementation.
#[async_trait]
pub trait ExtractText: Send + Sync {
    async fn extract_text(&self, bucket: &str, key: &str) -> anyhow::Result<ExtractedText>;
}

#[async_trait]
impl ExtractText for Textract {
    async fn extract_text(&self, bucket: &str, key: &str) -> anyhow::Result<ExtractedText> {
        self.detect_text(bucket, key).await
    }
}

/// The single extraction operation behind both the session-authenticated
/// and the queue-callback endpoints.
///
/// A document already in `PROCESSED` is returned as-is without
/// re-extracting, which absorbs duplicate queue deliveries. Documents in
/// `UPLOADED` or `FAILED` are moved into `PROCESSING` first so the
/// interactive endpoint works without a prior enqueue.
#[tracing::instrument(skip(db, extractor))]
pub async fn process_document(
    db: &PgPool,
    extractor: &impl ExtractText,
    document_id: &str,
) -> Result<Document, ApiError> {
    let document = db_client::documents::get_document(db, document_id)
        .await?
        .ok_or_else(|| ApiError::not_found(ErrorCode::DocumentNotFound))?;

    match document.status {
        DocumentStatus::Processed => return Ok(document),
        DocumentStatus::Uploaded | DocumentStatus::Failed => {
            db_client::documents::begin_processing(db, document_id)
                .await
                .map_err(advance_error)?;
        }
        DocumentStatus::Processing => {}
    }

    let extracted = match extractor
        .extract_text(&document.storage_bucket, &document.storage_key)
        .await
    {
        Ok(extracted) => extracted,
        Err(e) => return Err(fail_with(db, document_id, e).await),
    };

    match db_client::documents::complete_processing(db, document_id, &extracted.text, &extracted.raw)
        .await
    {
        Ok(_) => {}
        // Another delivery finished first; treat its result as ours.
        Err(AdvanceError::Invalid(_) | AdvanceError::Conflict) => {
            let document = db_client::documents::get_document(db, document_id)
                .await?
                .ok_or_else(|| ApiError::not_found(ErrorCode::DocumentNotFound))?;
            if document.status == DocumentStatus::Processed {
                return Ok(document);
            }
            return Err(ApiError::conflict(ErrorCode::DocumentAlreadyProcessing));
        }
        Err(AdvanceError::NotFound) => {
            return Err(ApiError::not_found(ErrorCode::DocumentNotFound));
        }
        Err(AdvanceError::Db(e)) => return Err(fail_with(db, document_id, e.into()).await),
    }

    let document = db_client::documents::get_document(db, document_id)
        .await?
        .ok_or_else(|| ApiError::not_found(ErrorCode::DocumentNotFound))?;
    Ok(document)
}

/// Compensating `Fail` transition. A compensation that itself fails leaves
/// the document stuck in `PROCESSING` and is logged distinctly.
async fn fail_with(db: &PgPool, document_id: &str, error: anyhow::Error) -> ApiError {
    tracing::error!(document_id = %document_id, error = %error, "document extraction failed");

    if let Err(comp) =
        db_client::documents::fail_processing(db, document_id, &error.to_string()).await
    {
        tracing::error!(
            document_id = %document_id,
            error = %comp,
            "could not mark document FAILED after extraction failure"
        );
    }

    ApiError::failed(ErrorCode::DocumentProcessFailed)
}

fn advance_error(e: AdvanceError) -> ApiError {
    match e {
        AdvanceError::NotFound => ApiError::not_found(ErrorCode::DocumentNotFound),
        AdvanceError::Invalid(_) | AdvanceError::Conflict => {
            ApiError::conflict(ErrorCode::DocumentAlreadyProcessing)
        }
        AdvanceError::Db(e) => ApiError::Internal(e.into()),
    }
}
