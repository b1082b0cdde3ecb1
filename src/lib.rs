//! Immutable house listing records.

pub mod error;
pub mod models;

pub use error::ListingError;
pub use models::{HouseListing, HouseListingBuilder, ListingDetails};
