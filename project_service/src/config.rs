use anyhow::Context;
pub use entrypoint::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,

    pub port: usize,

    /// The bucket uploaded documents land in.
    pub document_bucket: String,

    /// The queue document processing work is submitted to.
    pub document_process_queue: String,

    /// HS256 secret for session tokens.
    pub session_jwt_secret: String,

    /// HS256 secret for the worker callback tokens.
    pub oidc_callback_secret: String,

    /// Expected audience of callback tokens. When unset the internal
    /// processing endpoint rejects every request.
    pub oidc_callback_audience: Option<String>,

    /// How long presigned upload urls stay valid.
    pub presigned_url_expiry_seconds: u64,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;

        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a valid number")?;

        let document_bucket =
            std::env::var("DOCUMENT_BUCKET").context("DOCUMENT_BUCKET must be provided")?;

        let document_process_queue = std::env::var("DOCUMENT_PROCESS_QUEUE")
            .context("DOCUMENT_PROCESS_QUEUE must be provided")?;

        let session_jwt_secret =
            std::env::var("SESSION_JWT_SECRET").context("SESSION_JWT_SECRET must be provided")?;

        let oidc_callback_secret = std::env::var("OIDC_CALLBACK_SECRET")
            .context("OIDC_CALLBACK_SECRET must be provided")?;

        let oidc_callback_audience = std::env::var("OIDC_CALLBACK_AUDIENCE").ok();

        let presigned_url_expiry_seconds = std::env::var("PRESIGNED_URL_EXPIRY_SECONDS")
            .unwrap_or("600".to_string())
            .parse::<u64>()
            .context("PRESIGNED_URL_EXPIRY_SECONDS must be a valid number")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            database_url,
            port,
            document_bucket,
            document_process_queue,
            session_jwt_secret,
            oidc_callback_secret,
            oidc_callback_audience,
            presigned_url_expiry_seconds,
            environment,
        })
    }
}
