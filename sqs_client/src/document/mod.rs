use serde::{Deserialize, Serialize};

use crate::SQS;

mod enqueue_process_document;

/// Body of the messages placed on the document process queue. The worker
/// deserializes this back out of the raw message body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentProcessMessage {
    pub document_id: String,
}

impl SQS {
    /// Sets the document_process_queue.
    pub fn document_process_queue(mut self, document_process_queue: &str) -> Self {
        self.document_process_queue = Some(document_process_queue.to_string());
        self
    }

    /// Enqueues a document process message and returns the queue message id.
    #[tracing::instrument(skip(self))]
    pub async fn enqueue_document_process(&self, document_id: &str) -> anyhow::Result<String> {
        if let Some(document_process_queue) = &self.document_process_queue {
            return enqueue_process_document::enqueue_document_process(
                &self.inner,
                document_process_queue,
                document_id,
            )
            .await;
        }

        Err(anyhow::anyhow!("document_process_queue is not configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentProcessMessage;

    #[test]
    fn message_body_round_trips() {
        let body = serde_json::to_string(&DocumentProcessMessage {
            document_id: "doc-1".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"document_id":"doc-1"}"#);

        let parsed: DocumentProcessMessage = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.document_id, "doc-1");
    }
}
