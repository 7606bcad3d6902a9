//! Session state for one storefront visitor.
//!
//! Everything here lives in memory and is discarded when the process exits.
//! The state owns the profile, wallet, purchase history and catalog filter.
//! History outlives a logout and is gone only when the process exits;
//! the chat widget is reached through a [`ChatService`] handle so delayed
//! replies can be delivered while the shell waits for input.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use levelup_core::{FilterTag, Listing, ListingId, Price, filter_listings};

use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::error::{AppError, Result};
use crate::models::user::DEFAULT_RATING;
use crate::models::{DashboardStats, Notice, UserProfile};
use crate::services::auth::AuthService;
use crate::services::chat::ChatService;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page and catalog.
    #[default]
    Home,
    /// Personal dashboard (requires login).
    Dashboard,
}

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    pub listing: Listing,
    /// Amount debited from the wallet.
    pub paid: Price,
    pub purchased_at: DateTime<Utc>,
}

/// Read-only view of the dashboard tabs.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub profile: &'a UserProfile,
    pub purchases: &'a [Purchase],
    pub sales: &'a [Listing],
    pub stats: DashboardStats,
}

/// Session state shared by the shell and the CLI.
pub struct AppState {
    config: StorefrontConfig,
    content: ContentStore,
    chat: ChatService,
    user: Option<UserProfile>,
    purchases: Vec<Purchase>,
    sales: Vec<Listing>,
    filter: FilterTag,
    view: View,
}

impl AppState {
    /// Create a fresh session with the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let content = ContentStore::seeded(&config.support_email);
        Self::with_content(config, content)
    }

    /// Create a fresh session around a custom content store.
    #[must_use]
    pub fn with_content(config: StorefrontConfig, content: ContentStore) -> Self {
        let chat = ChatService::new(config.reply_delay);
        Self {
            config,
            content,
            chat,
            user: None,
            purchases: Vec::new(),
            sales: Vec::new(),
            filter: FilterTag::All,
            view: View::Home,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Handle to the chat widget.
    #[must_use]
    pub const fn chat(&self) -> &ChatService {
        &self.chat
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    #[must_use]
    pub const fn filter(&self) -> FilterTag {
        self.filter
    }

    pub fn set_filter(&mut self, tag: FilterTag) {
        info!(filter = %tag, "Catalog filter changed");
        self.filter = tag;
    }

    /// Catalog listings visible under the current filter.
    #[must_use]
    pub fn visible_listings(&self) -> Vec<&Listing> {
        filter_listings(self.content.listings(), self.filter)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Sign in through the "Steam" button.
    pub fn login_with_steam(&mut self) -> Notice {
        let profile = AuthService::new(&self.config.demo_account).login_with_steam();
        self.sign_in(profile)
    }

    /// Sign in through the email form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the email is malformed or the password blank.
    pub fn login_with_email(&mut self, email: &str, password: &SecretString) -> Result<Notice> {
        let profile =
            AuthService::new(&self.config.demo_account).login_with_email(email, password)?;
        Ok(self.sign_in(profile))
    }

    fn sign_in(&mut self, profile: UserProfile) -> Notice {
        self.user = Some(profile);
        Notice::info("Вход выполнен", "Добро пожаловать в LevelUp Market!")
    }

    /// Sign out, dropping the profile. Purchases and sales stay for the session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` if nobody is signed in.
    pub fn logout(&mut self) -> Result<Notice> {
        let user = self.user.take().ok_or(AppError::NotLoggedIn)?;
        info!(user = %user.email, "Logout");
        self.view = View::Home;
        Ok(Notice::info("Выход выполнен", "До скорой встречи!"))
    }

    // =========================================================================
    // Wallet
    // =========================================================================

    /// Buy a catalog listing with the wallet balance.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ListingNotFound` for an unknown id,
    /// `AppError::NotLoggedIn` when signed out and
    /// `AppError::InsufficientBalance` when the wallet cannot cover the price.
    /// The balance is untouched on every error.
    #[instrument(skip(self, id), fields(listing = %id))]
    pub fn buy(&mut self, id: &ListingId) -> Result<Notice> {
        let listing = self
            .content
            .get_listing(id)
            .ok_or_else(|| AppError::ListingNotFound(id.clone()))?;
        let user = self.user.as_mut().ok_or(AppError::NotLoggedIn)?;

        let Some(remaining) = user.balance.checked_sub(listing.price) else {
            warn!(price = %listing.price, balance = %user.balance, "Insufficient balance");
            return Err(AppError::InsufficientBalance {
                required: listing.price,
                available: user.balance,
            });
        };

        user.balance = remaining;
        info!(price = %listing.price, balance = %remaining, "Purchase completed");
        self.purchases.push(Purchase {
            listing: listing.clone(),
            paid: listing.price,
            purchased_at: Utc::now(),
        });

        Ok(Notice::info(
            "Покупка успешна!",
            format!("Вы приобрели {}", listing.title),
        ))
    }

    /// Add funds to the wallet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` when signed out, `AppError::BadInput`
    /// for a zero amount and `AppError::Price` on overflow.
    pub fn top_up(&mut self, amount: Price) -> Result<Notice> {
        let user = self.user.as_mut().ok_or(AppError::NotLoggedIn)?;
        if amount == Price::ZERO {
            return Err(AppError::BadInput("сумма должна быть больше нуля".to_string()));
        }
        user.balance = user.balance.checked_add(amount)?;
        info!(amount = %amount, balance = %user.balance, "Balance topped up");
        Ok(Notice::info(
            "Баланс пополнен",
            format!("Текущий баланс: {}", user.balance),
        ))
    }

    /// Replace the avatar URL; a blank URL removes it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` when signed out.
    pub fn set_avatar(&mut self, url: &str) -> Result<Notice> {
        let user = self.user.as_mut().ok_or(AppError::NotLoggedIn)?;
        let url = url.trim();
        user.avatar = (!url.is_empty()).then(|| url.to_string());
        Ok(Notice::info("Профиль обновлен", "Аватар изменен"))
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Put one of the user's own accounts up for sale.
    ///
    /// The listing goes to the "my sales" tab only; the catalog snapshot is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` when signed out and `AppError::BadInput`
    /// for a blank title.
    pub fn list_for_sale(&mut self, title: &str, price: Price) -> Result<Notice> {
        if self.user.is_none() {
            return Err(AppError::NotLoggedIn);
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadInput("укажите название аккаунта".to_string()));
        }

        let listing = Listing {
            id: ListingId::new(Uuid::new_v4().to_string()),
            title: title.to_string(),
            price,
            level: 0,
            game_count: 0,
            hours_played: 0,
            image_url: String::new(),
            featured: false,
            tags: Vec::new(),
        };
        info!(listing = %listing.id, price = %price, "Listing created");
        let notice = Notice::info(
            "Объявление создано",
            format!("{} выставлен на продажу за {}", listing.title, listing.price),
        );
        self.sales.push(listing);
        Ok(notice)
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Switch between the landing page and the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` when signed out.
    pub fn toggle_dashboard(&mut self) -> Result<View> {
        if self.user.is_none() {
            return Err(AppError::NotLoggedIn);
        }
        self.view = match self.view {
            View::Home => View::Dashboard,
            View::Dashboard => View::Home,
        };
        Ok(self.view)
    }

    /// Go back to the landing page.
    pub fn show_home(&mut self) {
        self.view = View::Home;
    }

    /// Snapshot of the dashboard tabs.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotLoggedIn` when signed out.
    pub fn dashboard(&self) -> Result<Dashboard<'_>> {
        let profile = self.user.as_ref().ok_or(AppError::NotLoggedIn)?;
        Ok(Dashboard {
            profile,
            purchases: &self.purchases,
            sales: &self.sales,
            stats: DashboardStats {
                purchases: self.purchases.len(),
                sales: self.sales.len(),
                total_spent: self.purchases.iter().map(|p| p.paid).sum(),
                rating: DEFAULT_RATING,
            },
        })
    }
}
