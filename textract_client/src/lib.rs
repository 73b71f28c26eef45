mod detect_text;

pub use detect_text::ExtractedText;

/// Thin wrapper around the Textract client for OCR over objects that already
/// live in S3.
#[derive(Clone, Debug)]
pub struct Textract {
    inner: aws_sdk_textract::Client,
}

impl Textract {
    pub fn new(inner: aws_sdk_textract::Client) -> Self {
        Self { inner }
    }

    /// Runs text detection against an object in S3 and returns the detected
    /// lines joined with newlines plus the raw block payload.
    #[tracing::instrument(skip(self))]
    pub async fn detect_text(&self, bucket: &str, key: &str) -> anyhow::Result<ExtractedText> {
        detect_text::detect_text(&self.inner, bucket, key).await
    }
}
