use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use project_service::api::{self, context::ApiContext};
use project_service::config::{Config, Environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    entrypoint::Entrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (10, 50),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::trace!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config), &config.document_bucket);
    tracing::trace!("initialized s3 client");

    let sqs_client = sqs_client::SQS::new(aws_sdk_sqs::Client::new(&aws_config))
        .document_process_queue(&config.document_process_queue);
    tracing::trace!("initialized sqs client");

    let textract_client = textract_client::Textract::new(aws_sdk_textract::Client::new(&aws_config));
    tracing::trace!("initialized textract client");

    let api_context = ApiContext {
        db,
        s3_client: Arc::new(s3_client),
        sqs_client: Arc::new(sqs_client),
        textract_client: Arc::new(textract_client),
        config: Arc::new(config),
    };

    api::setup_and_serve(api_context).await?;

    Ok(())
}
