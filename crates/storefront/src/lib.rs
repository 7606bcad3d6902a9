//! LevelUp Market storefront library.
//!
//! Session state, storefront content and the text views behind the
//! interactive shell. Exposed as a library so the CLI and the integration
//! tests can drive a session without a terminal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;
pub mod views;
