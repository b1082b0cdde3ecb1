use anyhow::{Context, Result};
use house_listing::{HouseListing, ListingDetails};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 House Listing");
    info!("================");

    let listings = [
        HouseListing::with_details(
            "1883 Atwood Rd, Toledo, OH 43615",
            "$75,000",
            1003,
            "single family",
            "5097751",
            1947,
            ListingDetails {
                bedroom_count: Some(2),
                bathroom_count: Some(1),
                active: Some(false),
                occupied: Some(false),
            },
        ),
        HouseListing::new(
            "1883 Atwood Rd, Toledo, OH 43615",
            "$75,000",
            1003,
            "single family",
            "5097751",
            1947,
        ),
        HouseListing::builder()
            .address("412 Elm St, Toledo, OH 43609")
            .asking_price("$129,900")
            .square_footage(1540)
            .listing_type("duplex")
            .listing_id("5102284")
            .year_built(1962)
            .occupied(false)
            .build()
            .context("Failed to build listing")?,
    ];

    for (i, listing) in listings.iter().enumerate() {
        debug!(?listing, "listing details");
        println!("{}. {}", i + 1, listing);
    }

    let active = listings.iter().filter(|l| l.is_active()).count();
    info!("✅ {} listings, {} active", listings.len(), active);

    Ok(())
}
