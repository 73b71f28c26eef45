use anyhow::Context;
use aws_sdk_s3::presigning::PresigningConfig;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::time::Duration as StdDuration;

/// A presigned PUT request the browser can use to upload file bytes
/// directly to the bucket.
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub expires_at: DateTime<Utc>,
}

/// Generates a presigned PUT url bound to the provided content type.
#[tracing::instrument(skip(client))]
pub async fn put_presigned_upload(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    expiry_seconds: u64,
) -> anyhow::Result<PresignedUpload> {
    let presigned = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .presigned(
            PresigningConfig::expires_in(StdDuration::from_secs(expiry_seconds))
                .context("invalid presign expiry")?,
        )
        .await
        .context(format!("could not presign upload for {key}"))?;

    let mut headers: HashMap<String, String> = presigned
        .headers()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    headers
        .entry("content-type".to_string())
        .or_insert_with(|| content_type.to_string());

    Ok(PresignedUpload {
        url: presigned.uri().to_string(),
        headers,
        expires_at: Utc::now() + Duration::seconds(expiry_seconds as i64),
    })
}
