//! # Booking Handlers
//!
//! Protected endpoints; the owner is always taken from [`AuthUser`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
};
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::{AppState, Booking};
use crate::services::booking::{self, CreateBookingRequest};

/// Creates a booking for the authenticated user.
///
/// POST /api/bookings CreateBookingRequest
///
/// # Returns
///
/// - `200 OK` with the stored [`Booking`]
/// - `400 Bad Request` - service, address or datetime missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<Json<Booking>> {
    debug!("Processing create booking request");
    let Json(payload) = payload?;

    let booking = booking::create_booking(&state.db_pool, user.user_id, payload).await?;
    Ok(Json(booking))
}

/// Lists the authenticated user's bookings, newest first.
///
/// GET /api/bookings
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Booking>>> {
    debug!("Processing list bookings request");

    let bookings = booking::list_bookings(&state.db_pool, user.user_id).await?;
    Ok(Json(bookings))
}
