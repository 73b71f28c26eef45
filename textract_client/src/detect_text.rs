use anyhow::Context;
use aws_sdk_textract::types::{BlockType, Document, S3Object};

#[derive(Clone, Debug)]
pub struct ExtractedText {
    /// Detected LINE blocks joined with newlines.
    pub text: String,
    /// Raw detection output, kept alongside the text for later re-parsing.
    pub raw: serde_json::Value,
}

pub(crate) async fn detect_text(
    inner: &aws_sdk_textract::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<ExtractedText> {
    let document = Document::builder()
        .s3_object(S3Object::builder().bucket(bucket).name(key).build())
        .build();

    let output = inner
        .detect_document_text()
        .document(document)
        .send()
        .await
        .context("detect_document_text failed")?;

    let blocks = output.blocks.unwrap_or_default();

    let lines: Vec<&str> = blocks
        .iter()
        .filter(|block| block.block_type() == Some(&BlockType::Line))
        .filter_map(|block| block.text())
        .collect();

    let raw_blocks: Vec<serde_json::Value> = blocks
        .iter()
        .map(|block| {
            serde_json::json!({
                "blockType": block.block_type().map(|t| t.as_str()),
                "text": block.text(),
                "confidence": block.confidence(),
            })
        })
        .collect();

    Ok(ExtractedText {
        text: lines.join("\n"),
        raw: serde_json::json!({ "blocks": raw_blocks }),
    })
}
