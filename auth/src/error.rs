use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("jwt is expired")]
    JwtExpired,

    #[error("jwt validation failed: {details}")]
    JwtValidationFailed { details: String },

    /// Callback tokens are only accepted when an expected audience is
    /// configured. No audience means no callback access at all.
    #[error("callback audience is not configured")]
    AudienceNotConfigured,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
