mod message_attribute;

pub mod document;

use aws_sdk_sqs as sqs;

#[derive(Clone, Debug)]
pub struct SQS {
    inner: sqs::Client,
    document_process_queue: Option<String>,
}

impl SQS {
    pub fn new(inner: sqs::Client) -> Self {
        Self {
            inner,
            document_process_queue: None,
        }
    }
}
