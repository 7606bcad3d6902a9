//! Integration tests for LevelUp Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p levelup-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_filter` - Filter tags over custom and seeded catalogs
//! - `assistant_replies` - Rule order and fallback of the support assistant
//! - `storefront_session` - Shell-driven sessions (login, purchase, dashboard)
//! - `chat_widget` - Delayed replies, reset and transcript ordering
//!
//! Everything runs in-process; no services need to be started.

use std::time::Duration;

use levelup_core::{Email, Listing, ListingId, Price};
use levelup_storefront::config::StorefrontConfig;
use levelup_storefront::content::ContentStore;
use levelup_storefront::state::AppState;

/// Configuration with the typing delay disabled.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        reply_delay: Duration::ZERO,
        ..StorefrontConfig::default()
    }
}

/// A fresh session over the seeded catalog.
#[must_use]
pub fn session() -> AppState {
    AppState::new(test_config())
}

/// A fresh session over `listings`.
///
/// # Panics
///
/// Panics if two listings share an id.
#[must_use]
pub fn session_with(listings: Vec<Listing>) -> AppState {
    let config = test_config();
    let content = ContentStore::with_listings(listings, &config.support_email)
        .unwrap_or_else(|e| panic!("fixture listings: {e}"));
    AppState::with_content(config, content)
}

/// Minimal listing with only the fields the filters look at.
#[must_use]
pub fn listing(id: &str, price: u64, featured: bool) -> Listing {
    Listing {
        id: ListingId::new(id),
        title: format!("Listing {id}"),
        price: Price::new(price),
        level: 1,
        game_count: 1,
        hours_played: 1,
        image_url: String::new(),
        featured,
        tags: Vec::new(),
    }
}

/// Three listings spanning the budget, mid and premium bands.
#[must_use]
pub fn three_band_catalog() -> Vec<Listing> {
    vec![
        listing("1", 1299, false),
        listing("2", 4999, true),
        listing("3", 8499, true),
    ]
}

/// Ids of `listings`, in order.
#[must_use]
pub fn ids<'a>(listings: &[&'a Listing]) -> Vec<&'a str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

/// The support address used in test content.
#[must_use]
pub fn support_email() -> Email {
    test_config().support_email
}
