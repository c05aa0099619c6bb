mod booking;
mod catalog;
mod state;
mod user;

pub use booking::{Booking, BookingStatus};
pub use catalog::{Catalog, CatalogError, Professional, Service};
pub use state::AppState;
pub use user::{User, UserCredentials};
