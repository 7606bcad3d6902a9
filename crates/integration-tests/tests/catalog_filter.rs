//! Integration tests for catalog filtering.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use levelup_core::catalog::{BUDGET_CEILING, PREMIUM_FLOOR, filter_listings_by_key};
use levelup_core::{FilterTag, Listing, filter_listings};
use levelup_integration_tests::{ids, listing, session, session_with, three_band_catalog};

// ============================================================================
// Tag Semantics
// ============================================================================

#[test]
fn test_three_band_catalog() {
    let catalog = three_band_catalog();
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::All)), ["1", "2", "3"]);
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::Budget)), ["1"]);
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::Featured)), ["2", "3"]);
    // 4999 sits below the premium floor
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::Premium)), ["3"]);
}

#[test]
fn test_band_boundaries() {
    let catalog = vec![
        listing("a", BUDGET_CEILING.amount() - 1, false),
        listing("b", BUDGET_CEILING.amount(), false),
        listing("c", PREMIUM_FLOOR.amount() - 1, false),
        listing("d", PREMIUM_FLOOR.amount(), false),
    ];
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::Budget)), ["a"]);
    assert_eq!(ids(&filter_listings(&catalog, FilterTag::Premium)), ["d"]);
}

#[test]
fn test_result_is_ordered_subsequence() {
    let catalog = vec![
        listing("z", 100, true),
        listing("m", 9000, false),
        listing("a", 200, true),
    ];
    for tag in FilterTag::ALL {
        let visible = filter_listings(&catalog, tag);
        let positions: Vec<_> = visible
            .iter()
            .map(|v| catalog.iter().position(|l| l.id == v.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{tag} reordered");
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = three_band_catalog();
    for tag in FilterTag::ALL {
        let once: Vec<Listing> = filter_listings(&catalog, tag).into_iter().cloned().collect();
        let twice = filter_listings(&once, tag);
        assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
    }
}

#[test]
fn test_empty_catalog() {
    for tag in FilterTag::ALL {
        assert!(filter_listings(&[], tag).is_empty());
    }
}

// ============================================================================
// Unknown Keys
// ============================================================================

#[test]
fn test_unknown_key_shows_everything() {
    let catalog = three_band_catalog();
    assert_eq!(ids(&filter_listings_by_key(&catalog, "cheap")), ["1", "2", "3"]);
    assert_eq!(ids(&filter_listings_by_key(&catalog, "")), ["1", "2", "3"]);
}

#[test]
fn test_strict_parse_reports_unknown_key() {
    assert!("cheap".parse::<FilterTag>().is_err());
    assert_eq!("budget".parse::<FilterTag>().unwrap(), FilterTag::Budget);
    assert!("Budget".parse::<FilterTag>().is_err());
}

// ============================================================================
// Session Catalog
// ============================================================================

#[test]
fn test_session_uses_custom_catalog() {
    let mut state = session_with(three_band_catalog());
    state.set_filter(FilterTag::Featured);
    assert_eq!(ids(&state.visible_listings()), ["2", "3"]);
}

#[test]
fn test_seeded_catalog_bands() {
    let mut state = session();
    state.set_filter(FilterTag::Premium);
    assert!(
        state
            .visible_listings()
            .iter()
            .all(|l| l.price >= PREMIUM_FLOOR)
    );
    state.set_filter(FilterTag::All);
    assert_eq!(state.visible_listings().len(), 6);
}
