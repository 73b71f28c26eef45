use std::collections::HashMap;

use crate::message_attribute::build_string_message_attribute;

use super::DocumentProcessMessage;

fn construct_message_attributes(
    document_id: &str,
) -> anyhow::Result<HashMap<String, aws_sdk_sqs::types::MessageAttributeValue>> {
    let mut message_attributes = HashMap::new();

    message_attributes.insert(
        "document_id".to_string(),
        build_string_message_attribute(document_id)?,
    );

    Ok(message_attributes)
}

/// Enqueues a document process message to the document process queue
#[tracing::instrument(skip(sqs_client))]
pub(crate) async fn enqueue_document_process(
    sqs_client: &aws_sdk_sqs::Client,
    queue_url: &str,
    document_id: &str,
) -> anyhow::Result<String> {
    let message_attributes = construct_message_attributes(document_id)?;
    let body = serde_json::to_string(&DocumentProcessMessage {
        document_id: document_id.to_string(),
    })?;

    let output = sqs_client
        .send_message()
        .queue_url(queue_url)
        .set_message_attributes(Some(message_attributes))
        .message_body(body)
        .send()
        .await?;

    output
        .message_id
        .ok_or_else(|| anyhow::anyhow!("send_message returned no message id"))
}
