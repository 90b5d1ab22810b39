//! Token issuer - signs time-limited session credentials.
//!
//! Tokens are stateless HS256 JWTs; there is no revocation or refresh.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub id: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Issues signed credentials after successful authentication.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for the given user
    fn issue(&self, email: &str, user_id: i32) -> AppResult<String>;
}

/// HS256 JWT issuer keyed with the configured shared secret.
pub struct JwtIssuer {
    key: EncodingKey,
    lifetime: Duration,
}

impl JwtIssuer {
    /// # Errors
    /// Returns an internal error if the configured lifetime does not fit a
    /// `Duration`.
    pub fn new(config: &Config) -> AppResult<Self> {
        let lifetime = Duration::try_hours(config.jwt_expiration_hours).ok_or_else(|| {
            AppError::internal(format!(
                "token lifetime of {} hours is out of range",
                config.jwt_expiration_hours
            ))
        })?;

        Ok(Self {
            key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            lifetime,
        })
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, email: &str, user_id: i32) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            id: user_id,
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(self.lifetime)
                .ok_or_else(|| AppError::internal("token expiry overflows the calendar"))?
                .timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.key)?)
    }
}
