//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during mock login.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] levelup_core::EmailError),

    /// Password field left blank.
    #[error("password cannot be empty")]
    EmptyPassword,
}
