//! # HTTP Request Handlers
//!
//! Each handler is responsible for extracting its inputs, delegating to a
//! service, and returning a JSON response or an [`AppError`](crate::error::AppError).
//!
//! ## Available Handlers
//!
//! - **Authentication** (`auth`) - Registration and login
//! - **Bookings** (`booking`) - Create and list the caller's bookings
//! - **Catalog** (`catalog`) - Services and professionals
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Payment** (`payment`) - Payment confirmation

mod auth;
mod booking;
mod catalog;
mod health_check;
mod payment;

pub use auth::*;
pub use booking::*;
pub use catalog::*;
pub use health_check::*;
pub use payment::*;
