//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! Every handler returns [`AppResult`], and [`AppError`] turns itself into an
//! HTTP status plus a JSON `{"error": "..."}` body, so nothing escapes the
//! router without being mapped.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::services::jwt::JwtError;
use crate::services::password::PasswordError;
use crate::services::payment::PaymentError;

/// Central application error type that encompasses all possible error conditions.
///
/// _Db errors are logged automatically, while other errors should be logged at the
/// point of creation if needed._ Internal details are never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("conflict: {0}")]
    Conflict(&'static str),

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl AppError {
    /// The status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Db(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// The message placed in the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Db(_) | AppError::Internal => "Internal server error",
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::Unauthorized(msg) => {
                *msg
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(e) = &self {
            // Log detailed database errors for internal tracking
            error!(?e, "Database error occurred");
        }

        let body = Json(ErrorBody {
            error: self.public_message(),
        });
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected malformed request body");
        AppError::Validation("Invalid request body")
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Encoding(e) => {
                error!(error = %e, "Failed to sign token");
                AppError::Internal
            }
            JwtError::InvalidToken | JwtError::TokenExpired => AppError::Unauthorized("Invalid token"),
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        error!(error = %err, "Password hashing failed");
        AppError::Internal
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        error!(error = %err, "Payment confirmation failed");
        AppError::Internal
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
