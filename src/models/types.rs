/// Bedroom count used when none is supplied
pub const DEFAULT_BEDROOM_COUNT: i32 = 3;
/// Bathroom count used when none is supplied
pub const DEFAULT_BATHROOM_COUNT: i32 = 2;
/// Active status used when none is supplied
pub const DEFAULT_ACTIVE: bool = true;
/// Occupied status used when none is supplied
pub const DEFAULT_OCCUPIED: bool = true;

/// Optional listing attributes.
///
/// Any field left as `None` falls back to its default when the listing is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDetails {
    /// Number of bedrooms (default 3)
    pub bedroom_count: Option<i32>,
    /// Number of bathrooms (default 2)
    pub bathroom_count: Option<i32>,
    /// Whether the listing is on the market (default true)
    pub active: Option<bool>,
    /// Whether the property has residents (default true)
    pub occupied: Option<bool>,
}

impl ListingDetails {
    pub(crate) fn bedroom_count(&self) -> i32 {
        self.bedroom_count.unwrap_or(DEFAULT_BEDROOM_COUNT)
    }

    pub(crate) fn bathroom_count(&self) -> i32 {
        self.bathroom_count.unwrap_or(DEFAULT_BATHROOM_COUNT)
    }

    pub(crate) fn active(&self) -> bool {
        self.active.unwrap_or(DEFAULT_ACTIVE)
    }

    pub(crate) fn occupied(&self) -> bool {
        self.occupied.unwrap_or(DEFAULT_OCCUPIED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_details_resolve_to_defaults() {
        let details = ListingDetails::default();

        assert_eq!(details.bedroom_count(), 3);
        assert_eq!(details.bathroom_count(), 2);
        assert!(details.active());
        assert!(details.occupied());
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let details = ListingDetails {
            bedroom_count: Some(0),
            bathroom_count: Some(5),
            active: Some(false),
            occupied: Some(false),
        };

        assert_eq!(details.bedroom_count(), 0);
        assert_eq!(details.bathroom_count(), 5);
        assert!(!details.active());
        assert!(!details.occupied());
    }
}
