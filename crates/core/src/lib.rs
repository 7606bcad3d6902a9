//! LevelUp Market Core - Shared types and decision logic.
//!
//! This crate provides the pieces of the marketplace that have a definable
//! contract and are used by every other component:
//! - `storefront` - Interactive terminal storefront (session, dashboard, chat widget)
//! - `cli` - One-shot commands for browsing the catalog and querying the assistant
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no timers,
//! no global state. Both decision functions are total: no input can make them
//! fail.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices and emails
//! - [`catalog`] - Listings and the filter-tag predicate
//! - [`assistant`] - Ordered keyword rules for the support chat
//! - [`chat`] - Chat messages and the append-only transcript

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod types;

pub use assistant::{Topic, select_response};
pub use catalog::{FilterTag, Listing, UnknownFilterTag, filter_listings};
pub use chat::{ChatMessage, Sender, Transcript};
pub use types::*;
