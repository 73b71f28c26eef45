use anyhow::Context;
pub use entrypoint::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    /// The queue document processing work arrives on.
    pub document_process_queue: String,
    pub queue_max_messages: i32,
    pub queue_wait_time_seconds: i32,

    /// Base url of the project service hosting the internal processor.
    pub processor_url: String,

    /// HS256 secret for the callback tokens sent to the processor.
    pub oidc_callback_secret: String,

    /// Audience claim baked into the callback tokens.
    pub oidc_callback_audience: String,

    /// Subject claim identifying this worker.
    pub oidc_service_account: String,

    /// The environment we are in
    pub environment: Environment,

    pub port: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let document_process_queue = std::env::var("DOCUMENT_PROCESS_QUEUE")
            .context("DOCUMENT_PROCESS_QUEUE must be provided")?;

        let queue_max_messages = std::env::var("QUEUE_MAX_MESSAGES")
            .unwrap_or("10".to_string())
            .parse::<i32>()
            .context("QUEUE_MAX_MESSAGES must be a valid number")?;

        let queue_wait_time_seconds = std::env::var("QUEUE_WAIT_TIME_SECONDS")
            .unwrap_or("4".to_string())
            .parse::<i32>()
            .context("QUEUE_WAIT_TIME_SECONDS must be a valid number")?;

        let processor_url =
            std::env::var("PROCESSOR_URL").context("PROCESSOR_URL must be provided")?;

        let oidc_callback_secret = std::env::var("OIDC_CALLBACK_SECRET")
            .context("OIDC_CALLBACK_SECRET must be provided")?;

        let oidc_callback_audience = std::env::var("OIDC_CALLBACK_AUDIENCE")
            .context("OIDC_CALLBACK_AUDIENCE must be provided")?;

        let oidc_service_account = std::env::var("OIDC_SERVICE_ACCOUNT")
            .context("OIDC_SERVICE_ACCOUNT must be provided")?;

        let environment = Environment::new_or_prod();

        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a valid number")?;

        Ok(Config {
            document_process_queue,
            queue_max_messages,
            queue_wait_time_seconds,
            processor_url,
            oidc_callback_secret,
            oidc_callback_audience,
            oidc_service_account,
            environment,
            port,
        })
    }
}
