//! # Utility Modules
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **Secrets** (`secret`) - Secret resolution from files or environment variables

pub mod constant;
pub mod secret;
