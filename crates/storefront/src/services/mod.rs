//! Storefront services.
//!
//! - `auth` - Mock sign-in (Steam button and email form)
//! - `chat` - Support chat widget with delayed assistant replies

pub mod auth;
pub mod chat;
