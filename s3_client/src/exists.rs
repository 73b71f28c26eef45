/// Checks whether the key exists via a head request; a service error other
/// than not-found still bubbles up.
#[tracing::instrument(skip(client))]
pub async fn exists(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<bool> {
    match client.head_object().bucket(bucket).key(key).send().await {
        Ok(_) => Ok(true),
        Err(err) => {
            let service_err = err.into_service_error();
            if service_err.is_not_found() {
                Ok(false)
            } else {
                Err(service_err.into())
            }
        }
    }
}
