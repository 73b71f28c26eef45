use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};

use crate::AuthError;

/// Callback tokens are short lived. The worker signs one right before
/// calling back into the service.
const CALLBACK_LIFETIME_SECONDS: usize = 60 * 5;

/// Claims carried by the token the queue worker presents on the internal
/// processing endpoint.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct CallbackClaims {
    /// The service account identity the worker runs as
    pub sub: String,
    /// The audience the token was minted for, the processor URL
    pub aud: String,
    /// The expiration time of the token
    pub exp: usize,
}

fn now_epoch_seconds() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as usize
}

#[tracing::instrument(skip(secret))]
pub fn encode_callback_token(
    secret: &str,
    service_account: &str,
    audience: &str,
) -> anyhow::Result<String> {
    let claims = CallbackClaims {
        sub: service_account.to_string(),
        aud: audience.to_string(),
        exp: now_epoch_seconds() + CALLBACK_LIFETIME_SECONDS,
    };

    let token = encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("failed to encode callback token")?;

    Ok(token)
}

/// Validates a callback token against the configured audience. When no
/// audience is configured the endpoint is closed and every token is
/// rejected.
pub fn validate_callback_token(
    token: &str,
    secret: &str,
    expected_audience: Option<&str>,
) -> Result<CallbackClaims, AuthError> {
    let Some(expected_audience) = expected_audience else {
        return Err(AuthError::AudienceNotConfigured);
    };

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_audience(&[expected_audience]);

    let decoded = match decode::<CallbackClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(AuthError::JwtExpired);
            }
            _ => {
                return Err(AuthError::JwtValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_validate() -> anyhow::Result<()> {
        let token = encode_callback_token(
            "callback_secret",
            "ocr-worker@example.com",
            "https://service.example.com/internal",
        )?;

        let claims = validate_callback_token(
            &token,
            "callback_secret",
            Some("https://service.example.com/internal"),
        )?;

        assert_eq!(claims.sub, "ocr-worker@example.com");

        Ok(())
    }

    #[test]
    fn wrong_audience_is_rejected() -> anyhow::Result<()> {
        let token = encode_callback_token(
            "callback_secret",
            "ocr-worker@example.com",
            "https://other.example.com",
        )?;

        let err = validate_callback_token(
            &token,
            "callback_secret",
            Some("https://service.example.com/internal"),
        )
        .err()
        .expect("expected error");

        assert_eq!(err.to_string(), "jwt validation failed: InvalidAudience");

        Ok(())
    }

    #[test]
    fn missing_audience_config_rejects_valid_tokens() -> anyhow::Result<()> {
        let token = encode_callback_token(
            "callback_secret",
            "ocr-worker@example.com",
            "https://service.example.com/internal",
        )?;

        let err = validate_callback_token(&token, "callback_secret", None)
            .err()
            .expect("expected error");

        assert_eq!(err.to_string(), "callback audience is not configured");

        Ok(())
    }
}
