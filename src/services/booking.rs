//! # Booking Service
//!
//! Creates and lists bookings. Every query is scoped by the caller's user id,
//! which comes from the verified token and never from the request body.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::Booking;

/// Request payload for creating a booking
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(required, length(min = 1))]
    pub service: Option<String>,
    pub sub_service: Option<String>,
    pub professional: Option<String>,
    #[validate(required, length(min = 1))]
    pub address: Option<String>,
    #[validate(required, length(min = 1))]
    pub datetime: Option<String>,
    pub notes: Option<String>,
}

/// Stores a new `pending` booking owned by `user_id` and returns the stored row.
///
/// # Errors
///
/// - [`AppError::Validation`] - service, address or datetime absent or empty
/// - [`AppError::Db`] - store failure
#[instrument(skip(db_pool, input))]
pub async fn create_booking(
    db_pool: &PgPool,
    user_id: Uuid,
    input: CreateBookingRequest,
) -> AppResult<Booking> {
    debug!("Creating booking");

    if input.validate().is_err() {
        warn!("Booking request missing required fields");
        return Err(AppError::Validation("Missing required fields"));
    }

    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (user_id, service, sub_service, professional, address, datetime, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, service, sub_service, professional, address, datetime, notes,
                  status, created_at
        "#,
    )
    .bind(user_id)
    .bind(input.service.unwrap_or_default())
    .bind(input.sub_service.unwrap_or_default())
    .bind(input.professional.unwrap_or_default())
    .bind(input.address.unwrap_or_default())
    .bind(input.datetime.unwrap_or_default())
    .bind(input.notes.unwrap_or_default())
    .fetch_one(db_pool)
    .await?;

    info!(booking_id = %booking.id, status = %booking.status, "Booking created");
    Ok(booking)
}

/// Returns the user's bookings, newest first.
#[instrument(skip(db_pool))]
pub async fn list_bookings(db_pool: &PgPool, user_id: Uuid) -> AppResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, user_id, service, sub_service, professional, address, datetime, notes,
               status, created_at
        FROM bookings
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await?;

    debug!(count = bookings.len(), "Bookings fetched");
    Ok(bookings)
}
