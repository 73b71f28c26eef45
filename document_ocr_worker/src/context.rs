use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct QueueWorkerContext {
    pub worker: Arc<sqs_worker::SQSWorker>,
    pub http: reqwest::Client,
    pub config: Config,
}
