//! # Application Constants
//!
//! This module defines configuration constants used throughout the CityEase backend.
//! These constants control token lifetimes, defaults and connection pool limits.

use std::time::Duration;

/// Expiration time for issued JWT tokens
///
/// There is no refresh flow, so users log in again after this duration.
pub const TOKEN_EXPIRY: Duration = Duration::from_secs(7 * 24 * 60 * 60); // 7 days

/// Port the server listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Signing secret used when neither `JWT_SECRET_FILE` nor `JWT_SECRET` is set.
/// Only suitable for local development.
pub const DEV_JWT_SECRET: &str = "dev_secret_change_me";

/// Default location of the service catalog seed file
pub const DEFAULT_SERVICES_SEED_PATH: &str = "services.seed.json";

/// Default location of the professional catalog seed file
pub const DEFAULT_PROFESSIONALS_SEED_PATH: &str = "professionals.seed.json";

/// Maximum number of pooled database connections
pub const MAX_DB_CONNECTIONS: u32 = 10;

/// How long a request waits for a pooled connection before failing
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections are closed after this duration
pub const DB_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Payment method echoed back when the client does not name one
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";
