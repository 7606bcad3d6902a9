//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `LEVELUP_CHAT_REPLY_DELAY_MS` - Simulated assistant typing delay (default: 1000, `0` disables)
//! - `LEVELUP_DEMO_NAME` - Display name of the mock account (default: Player One)
//! - `LEVELUP_DEMO_EMAIL` - Email of the mock account for Steam login (default: player@steam.com)
//! - `LEVELUP_DEMO_BALANCE` - Starting wallet balance in roubles (default: 15000)
//! - `LEVELUP_SUPPORT_EMAIL` - Support address shown in contacts (default: support@levelup.market)
//! - `RUST_LOG` - Log filter (default: `levelup_storefront=info`)

use std::str::FromStr;
use std::time::Duration;

use levelup_core::{Email, Price};
use thiserror::Error;

const DEFAULT_REPLY_DELAY_MS: &str = "1000";
const DEFAULT_DEMO_NAME: &str = "Player One";
const DEFAULT_DEMO_EMAIL: &str = "player@steam.com";
const DEFAULT_DEMO_BALANCE: &str = "15000";
const DEFAULT_SUPPORT_EMAIL: &str = "support@levelup.market";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// How long the assistant "types" before a reply appears
    pub reply_delay: Duration,
    /// Mock account handed out on login
    pub demo_account: DemoAccountConfig,
    /// Support address listed under contacts
    pub support_email: Email,
}

/// The profile every mock login produces.
#[derive(Debug, Clone)]
pub struct DemoAccountConfig {
    pub name: String,
    pub email: Email,
    pub starting_balance: Price,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            demo_account: DemoAccountConfig::default(),
            support_email: Email::parse(DEFAULT_SUPPORT_EMAIL)
                .unwrap_or_else(|_| unreachable!("default support email is valid")),
        }
    }
}

impl Default for DemoAccountConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEMO_NAME.to_string(),
            email: Email::parse(DEFAULT_DEMO_EMAIL)
                .unwrap_or_else(|_| unreachable!("default demo email is valid")),
            starting_balance: Price::new(15000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let delay_ms: u64 = parse_env("LEVELUP_CHAT_REPLY_DELAY_MS", DEFAULT_REPLY_DELAY_MS)?;
        let support_email = parse_env("LEVELUP_SUPPORT_EMAIL", DEFAULT_SUPPORT_EMAIL)?;

        Ok(Self {
            reply_delay: Duration::from_millis(delay_ms),
            demo_account: DemoAccountConfig::from_env()?,
            support_email,
        })
    }
}

impl DemoAccountConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let name = get_env_or_default("LEVELUP_DEMO_NAME", DEFAULT_DEMO_NAME);
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "LEVELUP_DEMO_NAME".to_string(),
                "must not be blank".to_string(),
            ));
        }
        let balance: u64 = parse_env("LEVELUP_DEMO_BALANCE", DEFAULT_DEMO_BALANCE)?;

        Ok(Self {
            name,
            email: parse_env("LEVELUP_DEMO_EMAIL", DEFAULT_DEMO_EMAIL)?,
            starting_balance: Price::new(balance),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
