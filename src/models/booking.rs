//! # Booking Types
//!
//! A booking is a request for a service at an address and time, owned by exactly
//! one user. Records are created once and never updated in this service.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Lifecycle state of a booking.
///
/// This enum corresponds directly to the PostgreSQL `booking_status` enum type
/// defined in the migrations. New bookings always start as `Pending`; the other
/// states are set by operators outside this API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created, waiting for a professional to accept
    Pending,
    /// Accepted and scheduled
    Confirmed,
    /// Work finished
    Completed,
    /// Called off by either side
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{status_str}")
    }
}

/// A stored booking record, serialized with its column names.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service: String,
    pub sub_service: String,
    pub professional: String,
    pub address: String,
    /// Free text as entered by the client, not parsed
    pub datetime: String,
    pub notes: String,
    pub status: BookingStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
