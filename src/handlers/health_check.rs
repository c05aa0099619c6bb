//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Health check endpoint that returns `{"ok": true}`.
///
/// It performs no database checks, so it answers as long as the process is
/// serving HTTP.
#[instrument]
pub async fn health_check() -> Json<Value> {
    debug!("Health check endpoint accessed");
    Json(json!({ "ok": true }))
}
