use anyhow::Context;
use std::sync::Arc;

use crate::config::Config;
use crate::context::QueueWorkerContext;
use crate::process::run_worker;

mod api;
mod config;
mod context;
mod process;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    entrypoint::Entrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;

    let worker = sqs_worker::SQSWorker::new(
        aws_sdk_sqs::Client::new(&aws_config),
        config.document_process_queue.clone(),
        config.queue_max_messages,
        config.queue_wait_time_seconds,
    );
    tracing::trace!("initialized sqs worker");

    let context = QueueWorkerContext {
        worker: Arc::new(worker),
        http: reqwest::Client::new(),
        config: config.clone(),
    };

    tokio::spawn(async move { run_worker(context).await });

    api::setup_and_serve(&config).await?;

    Ok(())
}
