//! # CityEase - Home Services Booking Backend
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven runtime configuration
//! - [`error`] - Central error type and its HTTP mapping
//! - [`handlers`] - HTTP request handlers for various endpoints
//! - [`middleware`] - Bearer token authentication
//! - [`models`] - Users, bookings, the catalog and shared state
//! - [`services`] - Business logic services (auth, bookings, JWT, payment)
//! - [`utils`] - Utility functions and constants

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use secrecy::SecretString;
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::AppConfig;
use crate::handlers::{
    confirm_payment, create_booking, health_check, list_bookings, list_professionals,
    list_services, login, register,
};
use crate::middleware::auth_middleware;
use crate::models::{AppState, Catalog, CatalogError};
use crate::services::jwt::JwtService;
use crate::services::payment::{PaymentGateway, StubPayment};

/// Creates an Axum router from the runtime configuration.
///
/// Loads the catalog from the configured seed files and wires the stub payment
/// gateway. This is a convenience wrapper around [`app_with_services`].
///
/// # Errors
///
/// Returns [`CatalogError`] if either seed file cannot be read or parsed.
pub fn app(db_pool: PgPool, config: &AppConfig) -> Result<Router, CatalogError> {
    let catalog = Catalog::load(&config.services_seed_path, &config.professionals_seed_path)?;
    Ok(app_with_services(
        db_pool,
        &config.jwt_secret,
        catalog,
        Arc::new(StubPayment),
    ))
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `db_pool` - PostgreSQL database connection pool
/// * `jwt_secret` - Secret used to sign and verify bearer tokens
/// * `catalog` - Static services and professionals
/// * `payment_gateway` - Gateway backing `/api/payment/confirm`
pub fn app_with_services(
    db_pool: PgPool,
    jwt_secret: &SecretString,
    catalog: Catalog,
    payment_gateway: Arc<dyn PaymentGateway>,
) -> Router {
    let state = Arc::new(AppState::new(
        db_pool,
        JwtService::from_secret(jwt_secret),
        catalog,
        payment_gateway,
    ));

    let protected_routes = Router::new()
        .route("/api/bookings", post(create_booking).get(list_bookings))
        .route("/api/payment/confirm", post(confirm_payment))
        .route_layer(from_fn_with_state(Arc::clone(&state), auth_middleware));

    let public_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/services", get(list_services))
        .route("/api/professionals", get(list_professionals));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    info!("Router assembled");

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
