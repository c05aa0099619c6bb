//! # Business Logic Services
//!
//! Services encapsulate domain-specific functionality and provide clean interfaces
//! for use by HTTP handlers.
//!
//! ## Available Services
//!
//! - **Auth** (`auth`) - Registration and login
//! - **Booking** (`booking`) - Ownership-scoped booking creation and listing
//! - **JWT** (`jwt`) - Token issuance and validation
//! - **Password** (`password`) - Salted password hashing
//! - **Payment** (`payment`) - Payment gateway trait and stub implementation

pub mod auth;
pub mod booking;
pub mod jwt;
pub mod password;
pub mod payment;
