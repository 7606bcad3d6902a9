//! Catalog listings and the filter-tag predicate.
//!
//! The catalog is a fixed snapshot: listings are created once at startup and
//! never updated. Filtering borrows from the snapshot and keeps its order, so
//! filtering a filtered view again with the same tag yields the same view.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{ListingId, Price};

/// Listings priced strictly below this are "budget".
pub const BUDGET_CEILING: Price = Price::new(3000);

/// Listings priced at or above this are "premium".
///
/// Prices in `[BUDGET_CEILING, PREMIUM_FLOOR)` belong to neither band.
pub const PREMIUM_FLOOR: Price = Price::new(5000);

/// One sellable game account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: Price,
    /// Account level.
    pub level: u32,
    /// Number of games on the account.
    pub game_count: u32,
    pub hours_played: u32,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Catalog view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTag {
    /// Every listing.
    #[default]
    All,
    /// Listings flagged as featured.
    Featured,
    /// Listings below [`BUDGET_CEILING`].
    Budget,
    /// Listings at or above [`PREMIUM_FLOOR`].
    Premium,
}

/// A textual filter key that is not one of the four known tags.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter tag: {0} (expected all, featured, budget or premium)")]
pub struct UnknownFilterTag(pub String);

impl FilterTag {
    /// All tags in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Featured, Self::Budget, Self::Premium];

    /// Map a textual key to a tag, treating anything unrecognized as [`FilterTag::All`].
    ///
    /// Use [`str::parse`] instead when a typo should be reported.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    /// Machine key (`all`, `featured`, `budget`, `premium`).
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Budget => "budget",
            Self::Premium => "premium",
        }
    }

    /// Button label shown above the catalog.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Featured => "Рекомендуем",
            Self::Budget => "Бюджетные",
            Self::Premium => "Премиум",
        }
    }

    /// Whether `listing` is visible under this tag.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Featured => listing.featured,
            Self::Budget => listing.price < BUDGET_CEILING,
            Self::Premium => listing.price >= PREMIUM_FLOOR,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Keys match exactly: `Budget` or ` budget` is not a tag.
impl FromStr for FilterTag {
    type Err = UnknownFilterTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "featured" => Ok(Self::Featured),
            "budget" => Ok(Self::Budget),
            "premium" => Ok(Self::Premium),
            _ => Err(UnknownFilterTag(s.to_owned())),
        }
    }
}

/// Return the listings visible under `tag`, in catalog order.
#[must_use]
pub fn filter_listings(listings: &[Listing], tag: FilterTag) -> Vec<&Listing> {
    listings.iter().filter(|l| tag.matches(l)).collect()
}

/// Like [`filter_listings`], but takes a raw key; unknown keys show everything.
#[must_use]
pub fn filter_listings_by_key<'a>(listings: &'a [Listing], key: &str) -> Vec<&'a Listing> {
    filter_listings(listings, FilterTag::from_key(key))
}
