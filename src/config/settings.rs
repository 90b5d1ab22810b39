//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_SSLMODE,
    DEFAULT_DB_USER, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_JWT_SECRET, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, JWT_EXPIRATION_HOURS_RANGE, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    pub db_sslmode: String,
    database_url: Option<String>,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("db_sslmode", &self.db_sslmode)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. Numeric values that fail to
    /// parse fall back to their defaults.
    ///
    /// # Errors
    /// Returns a validation error if the signing secret is shorter than
    /// [`MIN_JWT_SECRET_LENGTH`] or the token lifetime falls outside
    /// [`JWT_EXPIRATION_HOURS_RANGE`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using insecure placeholder secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        let jwt_expiration_hours = get("JWT_EXPIRATION_HOURS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS);

        if !JWT_EXPIRATION_HOURS_RANGE.contains(&jwt_expiration_hours) {
            return Err(AppError::validation(format!(
                "JWT_EXPIRATION_HOURS must be between {} and {}",
                JWT_EXPIRATION_HOURS_RANGE.start(),
                JWT_EXPIRATION_HOURS_RANGE.end()
            )));
        }

        Ok(Self {
            server_host: get_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: get("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            db_host: get_or("DB_HOST", DEFAULT_DB_HOST),
            db_port: get("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            db_user: get_or("DB_USER", DEFAULT_DB_USER),
            db_password: get_or("DB_PASSWORD", DEFAULT_DB_PASSWORD),
            db_name: get_or("DB_NAME", DEFAULT_DB_NAME),
            db_sslmode: get_or("DB_SSLMODE", DEFAULT_DB_SSLMODE),
            database_url: get("DATABASE_URL"),
            jwt_secret,
            jwt_expiration_hours,
        })
    }

    /// Connection URL for the database.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from
    /// the individual `DB_*` settings.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                self.db_user,
                self.db_password,
                self.db_host,
                self.db_port,
                self.db_name,
                self.db_sslmode
            ),
        }
    }

    /// Get JWT secret bytes for token signing.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
