//! FAQ listing.

use std::io::Write;

use askama::Template;

use levelup_storefront::content::ContentStore;
use levelup_storefront::views::FaqTemplate;

use super::Result;

/// Print every FAQ entry.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn print(content: &ContentStore, out: &mut impl Write) -> Result<()> {
    let rendered = FaqTemplate {
        entries: content.faq(),
    }
    .render()?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
