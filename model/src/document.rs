use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest filename fragment we keep in an object key.
pub const MAX_OBJECT_KEY_FILENAME_LEN: usize = 120;

/// Lifecycle state of a document. Transitions are closed over
/// [`DocumentStatus::advance`]; nothing else may change the status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Uploaded,
    Processing,
    Processed,
    Failed,
}

/// An event applied to a document's lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DocumentEvent {
    /// Work was submitted to the processing queue (or a retry of it).
    Enqueue,
    /// Extraction finished and results were persisted.
    Complete,
    /// Extraction (or anything on the way to it) failed.
    Fail,
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("cannot apply {event:?} to a document in status {from:?}")]
pub struct InvalidTransition {
    pub from: DocumentStatus,
    pub event: DocumentEvent,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "UPLOADED",
            DocumentStatus::Processing => "PROCESSING",
            DocumentStatus::Processed => "PROCESSED",
            DocumentStatus::Failed => "FAILED",
        }
    }

    /// The single transition function for the document lifecycle:
    /// `UPLOADED -> PROCESSING -> PROCESSED | FAILED`, with `FAILED`
    /// allowed back into `PROCESSING` on retry.
    pub fn advance(self, event: DocumentEvent) -> Result<DocumentStatus, InvalidTransition> {
        match (self, event) {
            (DocumentStatus::Uploaded, DocumentEvent::Enqueue) => Ok(DocumentStatus::Processing),
            (DocumentStatus::Failed, DocumentEvent::Enqueue) => Ok(DocumentStatus::Processing),
            (DocumentStatus::Processing, DocumentEvent::Complete) => Ok(DocumentStatus::Processed),
            (DocumentStatus::Processing, DocumentEvent::Fail) => Ok(DocumentStatus::Failed),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub project_id: String,
    pub created_by: String,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: Option<i64>,
    pub storage_bucket: String,
    pub storage_key: String,
    pub storage_uri: String,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<serde_json::Value>,
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing shape for `GET /projects/:id/documents`; extracted text and raw
/// results are deliberately left out of listings.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub project_id: String,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: Option<i64>,
    pub status: DocumentStatus,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub storage_bucket: String,
    pub storage_key: String,
    pub storage_uri: String,
}

/// Builds the object key for an uploaded document:
/// `projects/{project_id}/documents/{document_id}/{sanitized filename}`.
pub fn build_document_object_key(project_id: &str, document_id: &str, filename: &str) -> String {
    format!(
        "projects/{}/documents/{}/{}",
        project_id,
        document_id,
        sanitize_filename(filename)
    )
}

/// Collapses every run of characters outside `[A-Za-z0-9._-]` into a single
/// `-` and truncates to [`MAX_OBJECT_KEY_FILENAME_LEN`].
pub fn sanitize_filename(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());
    let mut in_run = false;
    for c in filename.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out.truncate(MAX_OBJECT_KEY_FILENAME_LEN);
    out
}

pub mod request {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadUrlRequest {
        pub filename: Option<String>,
        pub content_type: Option<String>,
        pub size_bytes: Option<i64>,
    }
}

pub mod response {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadTarget {
        /// Time-limited presigned PUT url for the raw file bytes.
        pub url: String,
        /// Headers the client must send on the PUT.
        pub headers: std::collections::HashMap<String, String>,
        pub expires_at: DateTime<Utc>,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct StorageLocation {
        pub bucket: String,
        pub object_key: String,
        pub uri: String,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadUrlResponse {
        pub document_id: String,
        pub upload: UploadTarget,
        pub storage: StorageLocation,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct EnqueueResponse {
        pub ok: bool,
        pub task: QueueTaskDescriptor,
    }

    /// Descriptor of the task submitted to the processing queue.
    #[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct QueueTaskDescriptor {
        pub message_id: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_allows_exactly_four_edges() {
        use DocumentEvent::*;
        use DocumentStatus::*;

        assert_eq!(Uploaded.advance(Enqueue), Ok(Processing));
        assert_eq!(Failed.advance(Enqueue), Ok(Processing));
        assert_eq!(Processing.advance(Complete), Ok(Processed));
        assert_eq!(Processing.advance(Fail), Ok(Failed));

        for from in [Uploaded, Processing, Processed, Failed] {
            for event in [Enqueue, Complete, Fail] {
                let allowed = matches!(
                    (from, event),
                    (Uploaded, Enqueue)
                        | (Failed, Enqueue)
                        | (Processing, Complete)
                        | (Processing, Fail)
                );
                assert_eq!(from.advance(event).is_ok(), allowed, "{from:?} {event:?}");
            }
        }
    }

    #[test]
    fn terminal_processed_accepts_nothing() {
        assert!(DocumentStatus::Processed
            .advance(DocumentEvent::Enqueue)
            .is_err());
        assert!(DocumentStatus::Processed
            .advance(DocumentEvent::Complete)
            .is_err());
    }

    #[test]
    fn sanitize_collapses_runs_and_truncates() {
        assert_eq!(sanitize_filename("receipt 2024.jpg"), "receipt-2024.jpg");
        assert_eq!(sanitize_filename("영수증 (1).pdf"), "-1-.pdf");
        assert_eq!(sanitize_filename("a///b"), "a-b");

        let long = "x".repeat(300);
        assert_eq!(sanitize_filename(&long).len(), MAX_OBJECT_KEY_FILENAME_LEN);
    }

    #[test]
    fn object_key_contains_project_and_document_path() {
        let key = build_document_object_key("proj-1", "doc-1", "r.jpg");
        assert_eq!(key, "projects/proj-1/documents/doc-1/r.jpg");
    }
}
