//! # Auth Service
//!
//! Registration and login against the `users` table. Both flows end by issuing a
//! signed token through [`JwtService`]. Email uniqueness is left to the database's
//! unique constraint rather than checked up front, so concurrent registrations of
//! the same address cannot both succeed.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{User, UserCredentials};
use crate::services::jwt::JwtService;
use crate::services::password::{hash_password, verify_password};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request payload for registering a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// Request payload for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned by both register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Creates a user and returns it together with a fresh token.
///
/// # Errors
///
/// - [`AppError::Validation`] - email or password absent or empty
/// - [`AppError::Conflict`] - email already registered
/// - [`AppError::Db`] / [`AppError::Internal`] - store or hashing failure
#[instrument(skip_all, fields(email = ?input.email))]
pub async fn register(
    db_pool: &PgPool,
    jwt_service: &JwtService,
    input: RegisterRequest,
) -> AppResult<AuthResponse> {
    debug!("Processing registration");

    if input.validate().is_err() {
        warn!("Registration without email or password");
        return Err(AppError::Validation("Email and password required"));
    }

    let email = input.email.unwrap_or_default();
    let password_hash = hash_password(input.password.unwrap_or_default()).await?;
    debug!("Password hashed");

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, phone
        "#,
    )
    .bind(input.name.unwrap_or_default())
    .bind(&email)
    .bind(password_hash)
    .bind(input.phone.unwrap_or_default())
    .fetch_one(db_pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            warn!("Email already registered");
            AppError::Conflict("Email already exists")
        }
        other => AppError::Db(other),
    })?;

    let token = jwt_service.issue_token(user.id, &user.email)?;
    info!(user_id = %user.id, "User registered");

    Ok(AuthResponse { user, token })
}

/// Verifies credentials and returns the user with a fresh token.
///
/// Unknown email, missing password and wrong password all produce the same
/// [`AppError::Unauthorized`] so callers cannot probe which emails exist.
#[instrument(skip_all, fields(email = ?input.email))]
pub async fn login(
    db_pool: &PgPool,
    jwt_service: &JwtService,
    input: LoginRequest,
) -> AppResult<AuthResponse> {
    debug!("Processing login");

    let (Some(email), Some(password)) = (input.email, input.password) else {
        warn!("Login without email or password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
    };

    let credentials = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, name, email, phone, password_hash FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(db_pool)
    .await?;

    let Some(credentials) = credentials else {
        warn!("Login for unknown email");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(password, credentials.password_hash.clone()).await? {
        warn!(user_id = %credentials.id, "Wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
    }

    let user = User::from(credentials);
    let token = jwt_service.issue_token(user.id, &user.email)?;
    info!(user_id = %user.id, "User logged in");

    Ok(AuthResponse { user, token })
}
