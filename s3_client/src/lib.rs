mod exists;
mod get;
mod put;

pub use put::PresignedUpload;

/// Canonical URI for an object, stored on the document row.
pub fn object_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
    document_bucket: String,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client, document_bucket: &str) -> Self {
        Self {
            inner,
            document_bucket: document_bucket.to_string(),
        }
    }

    pub fn document_bucket(&self) -> &str {
        &self.document_bucket
    }

    /// Issues a time-limited presigned PUT url bound to the given content
    /// type. The client must send the returned headers verbatim.
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_upload(
        &self,
        key: &str,
        content_type: &str,
        expiry_seconds: u64,
    ) -> anyhow::Result<PresignedUpload> {
        put::put_presigned_upload(
            &self.inner,
            &self.document_bucket,
            key,
            content_type,
            expiry_seconds,
        )
        .await
    }

    /// Retrieves the object bytes from the document bucket.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        get::get(&self.inner, &self.document_bucket, key).await
    }

    /// Checks if a given key exists in the document bucket.
    #[tracing::instrument(skip(self))]
    pub async fn exists(&self, key: &str) -> anyhow::Result<bool> {
        exists::exists(&self.inner, &self.document_bucket, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_uri_is_s3_scheme() {
        assert_eq!(
            object_uri("documents", "projects/p/documents/d/r.jpg"),
            "s3://documents/projects/p/documents/d/r.jpg"
        );
    }
}
