use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub db: PgPool,
    pub s3_client: Arc<s3_client::S3>,
    pub sqs_client: Arc<sqs_client::SQS>,
    pub textract_client: Arc<textract_client::Textract>,
    pub config: Arc<Config>,
}
