//! # Runtime Configuration
//!
//! All settings come from environment variables (optionally loaded from a `.env`
//! file by `main`). Parsing is done against a lookup function so the same code
//! path can be driven from a plain map in tests.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL` - Required, `postgres://` or `postgresql://` connection string
//! - `JWT_SECRET_FILE` / `JWT_SECRET` - Token signing secret (file variant wins)
//! - `PORT` - Listening port, defaults to [`DEFAULT_PORT`]
//! - `SERVICES_SEED_PATH` / `PROFESSIONALS_SEED_PATH` - Catalog seed files

use std::env;

use secrecy::SecretString;
use thiserror::Error;
use tracing::warn;

use crate::utils::constant::*;
use crate::utils::secret::get_secret;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`DATABASE_URL` is not set")]
    MissingDatabaseUrl,
    #[error("`DATABASE_URL` must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,
    #[error("`PORT` is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process-wide settings resolved once at startup
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: SecretString,
    pub port: u16,
    pub services_seed_path: String,
    pub professionals_seed_path: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is missing or malformed, or when `PORT` does not
    /// parse. A missing signing secret only produces a warning and falls back to
    /// [`DEV_JWT_SECRET`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        if !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://"))
        {
            return Err(ConfigError::InvalidDatabaseUrl);
        }

        let jwt_secret = get_secret(&lookup, "JWT_SECRET_FILE", "JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .unwrap_or_else(|| {
                warn!("Missing JWT_SECRET, using insecure development fallback");
                DEV_JWT_SECRET.to_string()
            });

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret: SecretString::from(jwt_secret),
            port,
            services_seed_path: lookup("SERVICES_SEED_PATH")
                .unwrap_or_else(|| DEFAULT_SERVICES_SEED_PATH.to_string()),
            professionals_seed_path: lookup("PROFESSIONALS_SEED_PATH")
                .unwrap_or_else(|| DEFAULT_PROFESSIONALS_SEED_PATH.to_string()),
        })
    }
}
