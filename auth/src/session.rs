use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};

/// How long an issued session stays valid.
const SESSION_LIFETIME_SECONDS: usize = 60 * 60 * 24 * 30;

/// Claims carried by a session access token.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct SessionClaims {
    /// The user id the session belongs to
    pub sub: String,
    /// The email of the user
    pub email: String,
    /// The global role of the user, USER or ADMIN
    pub role: String,
    /// The expiration time of the token
    pub exp: usize,
}

fn now_epoch_seconds() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as usize
}

#[tracing::instrument(skip_all, fields(user_id = user_id))]
pub fn encode_session_token(
    secret: &str,
    user_id: &str,
    email: &str,
    role: &str,
) -> anyhow::Result<String> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp: now_epoch_seconds() + SESSION_LIFETIME_SECONDS,
    };

    let token = encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("failed to encode session token")?;

    Ok(token)
}

pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, crate::AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoded = match decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(crate::AuthError::JwtExpired);
            }
            _ => {
                return Err(crate::AuthError::JwtValidationFailed {
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
        let token = encode_session_token("super_secret_key", "user-1", "test@example.com", "USER")?;
        let claims = validate_session_token(&token, "super_secret_key")?;

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "USER");

        Ok(())
    }

    #[test]
    fn wrong_secret_is_rejected() -> anyhow::Result<()> {
        let token = encode_session_token("super_secret_key", "user-1", "test@example.com", "USER")?;

        let err = validate_session_token(&token, "different_key")
            .err()
            .expect("expected error");

        assert_eq!(err.to_string(), "jwt validation failed: InvalidSignature");

        Ok(())
    }

    #[test]
    fn expired_session_is_rejected() {
        let claims = SessionClaims {
            sub: "user-1".to_string(),
            email: "test@example.com".to_string(),
            role: "USER".to_string(),
            exp: now_epoch_seconds() - 10000,
        };
        let token = encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"super_secret_key"),
        )
        .unwrap();

        let err = validate_session_token(&token, "super_secret_key")
            .err()
            .expect("expected error");

        assert_eq!(err.to_string(), "jwt is expired");
    }
}
