//! Mock authentication service.
//!
//! There is no account database: both login paths hand out the configured
//! demo profile. The email form still validates its input so the shell
//! behaves like a real sign-in dialog, but the password is never checked
//! beyond being non-empty.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use levelup_core::Email;

use crate::config::DemoAccountConfig;
use crate::models::UserProfile;

/// Authentication service.
///
/// Hands out fresh demo profiles; holds no session state of its own.
pub struct AuthService<'a> {
    demo: &'a DemoAccountConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(demo: &'a DemoAccountConfig) -> Self {
        Self { demo }
    }

    /// "Sign in through Steam": always succeeds with the demo profile.
    #[instrument(skip(self))]
    #[must_use]
    pub fn login_with_steam(&self) -> UserProfile {
        info!(user = %self.demo.email, "Steam login");
        self.profile_for(self.demo.email.clone())
    }

    /// Sign in with the email form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::EmptyPassword` if the password is blank.
    #[instrument(skip(self, password))]
    pub fn login_with_email(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email)?;
        if password.expose_secret().trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        info!(user = %email, "Email login");
        Ok(self.profile_for(email))
    }

    fn profile_for(&self, email: Email) -> UserProfile {
        UserProfile {
            name: self.demo.name.clone(),
            email,
            avatar: None,
            balance: self.demo.starting_balance,
        }
    }
}
