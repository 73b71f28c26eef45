use anyhow::Context;
use sqs_client::document::DocumentProcessMessage;

/// Forwards one queue message to the internal processing endpoint. The
/// message is only deleted after a 2xx; anything else leaves it on the
/// queue for redelivery.
#[tracing::instrument(skip(ctx, message), fields(message_id=message.message_id))]
pub async fn handle(
    ctx: &crate::context::QueueWorkerContext,
    message: &aws_sdk_sqs::types::Message,
) -> anyhow::Result<()> {
    tracing::debug!("processing message");

    let body = message.body.as_deref().context("message has no body")?;
    let parsed: DocumentProcessMessage =
        serde_json::from_str(body).context("message body is not a document process message")?;

    tracing::info!(document_id=%parsed.document_id, "starting ocr callback for document");

    let token = auth::callback::encode_callback_token(
        &ctx.config.oidc_callback_secret,
        &ctx.config.oidc_service_account,
        &ctx.config.oidc_callback_audience,
    )?;

    let url = format!(
        "{}/internal/documents/{}/process",
        ctx.config.processor_url.trim_end_matches('/'),
        parsed.document_id
    );

    let response = ctx
        .http
        .post(&url)
        .bearer_auth(token)
        .send()
        .await
        .context("could not reach the processing endpoint")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("processing endpoint returned {status}: {body}");
    }

    tracing::info!(document_id=%parsed.document_id, "document processed");

    ctx.worker.cleanup_message(message).await?;

    Ok(())
}
