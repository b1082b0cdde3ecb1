//! Error types for building house listings.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Errors raised while assembling a [`HouseListing`](crate::models::HouseListing)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

impl From<UninitializedFieldError> for ListingError {
    fn from(e: UninitializedFieldError) -> Self {
        Self::MissingRequiredField(e.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_field_maps_to_missing_required_field() {
        let err = ListingError::from(UninitializedFieldError::new("year_built"));
        assert_eq!(err, ListingError::MissingRequiredField("year_built"));
    }
}
