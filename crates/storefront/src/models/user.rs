//! Logged-in user profile.

use serde::{Deserialize, Serialize};

use levelup_core::{Email, Price};

/// Rating shown on every dashboard; there is no review system behind it.
pub const DEFAULT_RATING: &str = "5.0";

/// The signed-in user's profile and wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    pub email: Email,
    /// Avatar image URL; initials are shown when absent.
    pub avatar: Option<String>,
    /// Wallet balance in roubles.
    pub balance: Price,
}

impl UserProfile {
    /// Up to two leading characters of the name, upper-cased (`"PL"` for `"Player One"`).
    #[must_use]
    pub fn initials(&self) -> String {
        self.name.chars().take(2).flat_map(char::to_uppercase).collect()
    }
}

/// Activity numbers on the dashboard's wallet tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub purchases: usize,
    pub sales: usize,
    pub total_spent: Price,
    pub rating: &'static str,
}
