use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::models::{AppState, Professional, Service};

/// Query string for the professionals listing
#[derive(Debug, Deserialize)]
pub struct ProfessionalsQuery {
    pub service: Option<String>,
}

/// GET /api/services
#[instrument(skip_all)]
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    debug!("Listing services");
    Json(state.catalog.services().to_vec())
}

/// GET /api/professionals?service=<name>
///
/// Without `service` every professional is returned; an unknown service name
/// yields an empty list rather than an error.
#[instrument(skip(state))]
pub async fn list_professionals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProfessionalsQuery>,
) -> Json<Vec<Professional>> {
    let professionals = state.catalog.professionals(query.service.as_deref());
    debug!(count = professionals.len(), "Listing professionals");
    Json(professionals)
}
