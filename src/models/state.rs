use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::Catalog;
use crate::services::{jwt::JwtService, payment::PaymentGateway};

/// Application state shared across requests. Needs to be thread-safe.
///
/// Nothing in here is mutated after startup; the pool handles its own locking.
pub struct AppState {
    /// The PostgreSQL database connection pool.
    pub db_pool: PgPool,
    /// JWT service for token generation and validation.
    pub jwt_service: JwtService,
    /// Static services and professionals.
    pub catalog: Catalog,
    /// Gateway used to confirm booking payments.
    pub payment_gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Creates a new application state with the provided services.
    pub fn new(
        db_pool: PgPool,
        jwt_service: JwtService,
        catalog: Catalog,
        payment_gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        info!("Initializing application state");
        debug!(
            services = catalog.services().len(),
            "Attaching catalog to state"
        );

        Self {
            db_pool,
            jwt_service,
            catalog,
            payment_gateway,
        }
    }
}
