//! # Authentication Handlers
//!
//! HTTP endpoints for account registration and password login. Both return the
//! public user record together with a bearer token valid for seven days.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::AppState;
use crate::services::auth::{self, AuthResponse, LoginRequest, RegisterRequest};

/// Registers a new user.
///
/// POST /api/auth/register RegisterRequest
///
/// # Returns
///
/// - `200 OK` with [`AuthResponse`] - Account created
/// - `400 Bad Request` - Missing email or password, or malformed body
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing failure
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    debug!("Processing register request");
    let Json(payload) = payload?;

    let response = auth::register(&state.db_pool, &state.jwt_service, payload).await?;
    Ok(Json(response))
}

/// Logs a user in with email and password.
///
/// POST /api/auth/login LoginRequest
///
/// # Returns
///
/// - `200 OK` with [`AuthResponse`] - Credentials accepted
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database failure
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    debug!("Processing login request");
    let Json(payload) = payload?;

    let response = auth::login(&state.db_pool, &state.jwt_service, payload).await?;
    Ok(Json(response))
}
