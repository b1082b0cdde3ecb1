mod types;

use std::fmt;

use derive_builder::Builder;

use crate::error::ListingError;
pub use types::{
    ListingDetails, DEFAULT_ACTIVE, DEFAULT_BATHROOM_COUNT, DEFAULT_BEDROOM_COUNT,
    DEFAULT_OCCUPIED,
};

/// A house offered for sale or rent.
///
/// Listings are immutable once built. Use [`HouseListing::new`] when only the
/// required attributes are known, [`HouseListing::with_details`] to supply the
/// optional ones, or [`HouseListing::builder`] to set fields by name.
///
/// The builder's `build()` fails with [`ListingError::MissingRequiredField`]
/// on the first required field left unset.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(pattern = "owned", setter(into), build_fn(error = "ListingError"))]
pub struct HouseListing {
    address: String,
    /// Formatted as listed, e.g. "$75,000"
    asking_price: String,
    square_footage: i32,
    listing_type: String,
    listing_id: String,
    year_built: i32,
    #[builder(default = "DEFAULT_BEDROOM_COUNT")]
    bedroom_count: i32,
    #[builder(default = "DEFAULT_BATHROOM_COUNT")]
    bathroom_count: i32,
    #[builder(default = "DEFAULT_ACTIVE")]
    active: bool,
    #[builder(default = "DEFAULT_OCCUPIED")]
    occupied: bool,
}

impl HouseListing {
    /// Create a listing from the required attributes, defaulting the rest
    pub fn new(
        address: impl Into<String>,
        asking_price: impl Into<String>,
        square_footage: i32,
        listing_type: impl Into<String>,
        listing_id: impl Into<String>,
        year_built: i32,
    ) -> Self {
        Self::with_details(
            address,
            asking_price,
            square_footage,
            listing_type,
            listing_id,
            year_built,
            ListingDetails::default(),
        )
    }

    /// Create a listing from the required attributes plus optional details
    pub fn with_details(
        address: impl Into<String>,
        asking_price: impl Into<String>,
        square_footage: i32,
        listing_type: impl Into<String>,
        listing_id: impl Into<String>,
        year_built: i32,
        details: ListingDetails,
    ) -> Self {
        Self {
            address: address.into(),
            asking_price: asking_price.into(),
            square_footage,
            listing_type: listing_type.into(),
            listing_id: listing_id.into(),
            year_built,
            bedroom_count: details.bedroom_count(),
            bathroom_count: details.bathroom_count(),
            active: details.active(),
            occupied: details.occupied(),
        }
    }

    pub fn builder() -> HouseListingBuilder {
        HouseListingBuilder::default()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn asking_price(&self) -> &str {
        &self.asking_price
    }

    pub fn square_footage(&self) -> i32 {
        self.square_footage
    }

    /// Free-form category such as "single family" or "condo"
    pub fn listing_type(&self) -> &str {
        &self.listing_type
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    pub fn year_built(&self) -> i32 {
        self.year_built
    }

    pub fn bedroom_count(&self) -> i32 {
        self.bedroom_count
    }

    pub fn bathroom_count(&self) -> i32 {
        self.bathroom_count
    }

    /// Whether the listing is currently on the market
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the property currently has residents
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

impl fmt::Display for HouseListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "off market" };
        let occupancy = if self.occupied { "occupied" } else { "vacant" };

        write!(
            f,
            "{} ({}) - {} bd, {} ba, {} sqft {}, built {}, #{} [{}, {}]",
            self.address,
            self.asking_price,
            self.bedroom_count,
            self.bathroom_count,
            self.square_footage,
            self.listing_type,
            self.year_built,
            self.listing_id,
            status,
            occupancy,
        )
    }
}
