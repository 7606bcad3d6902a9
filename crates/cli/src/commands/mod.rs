//! CLI command implementations.
//!
//! Commands write to any [`std::io::Write`] so they can be exercised
//! against an in-memory buffer.

pub mod ask;
pub mod catalog;
pub mod faq;

use thiserror::Error;

use levelup_core::UnknownFilterTag;

/// Errors a command can report.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    UnknownFilter(#[from] UnknownFilterTag),

    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
