//! Catalog queries.

use std::io::Write;

use askama::Template;
use tracing::info;

use levelup_core::{FilterTag, ListingId, filter_listings};
use levelup_storefront::content::ContentStore;
use levelup_storefront::views::{CatalogTemplate, ListingTemplate};

use super::{CommandError, Result};

/// Print the catalog under `filter`.
///
/// Unlike the interactive shell, an unknown filter key is an error here.
///
/// # Errors
///
/// Returns `CommandError::UnknownFilter` for an unrecognized key, or an
/// output error.
pub fn list(
    content: &ContentStore,
    filter: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let tag = filter.map(str::parse::<FilterTag>).transpose()?.unwrap_or_default();
    let listings = filter_listings(content.listings(), tag);
    info!(filter = %tag, count = listings.len(), "Listing catalog");

    if json {
        serde_json::to_writer_pretty(&mut *out, &listings)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", CatalogTemplate::new(tag, listings).render()?)?;
    }
    Ok(())
}

/// Print one listing.
///
/// # Errors
///
/// Returns `CommandError::ListingNotFound` for an unknown id, or an output
/// error.
pub fn show(content: &ContentStore, id: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let listing = content
        .get_listing(&ListingId::new(id.trim()))
        .ok_or_else(|| CommandError::ListingNotFound(id.to_string()))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, listing)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", ListingTemplate { listing }.render()?)?;
    }
    Ok(())
}
