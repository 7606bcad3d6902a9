//! Unified error handling for storefront actions.
//!
//! Every session operation returns `Result<T, AppError>`. Errors are not
//! fatal: the shell turns them into a destructive [`Notice`] and carries on.

use thiserror::Error;

use levelup_core::{ListingId, Price, PriceOverflow};

use crate::models::Notice;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// The action needs a signed-in user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The wallet cannot cover the purchase.
    #[error("Insufficient balance: need {required}, have {available}")]
    InsufficientBalance { required: Price, available: Price },

    /// No catalog listing with this id.
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    /// Balance arithmetic overflowed.
    #[error("Price error: {0}")]
    Price(#[from] PriceOverflow),

    /// Malformed user input.
    #[error("Bad input: {0}")]
    BadInput(String),
}

impl AppError {
    /// The toast to show for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Auth(AuthError::InvalidEmail(_)) => {
                Notice::destructive("Ошибка входа", "Проверьте адрес электронной почты")
            }
            Self::Auth(AuthError::EmptyPassword) => {
                Notice::destructive("Ошибка входа", "Введите пароль")
            }
            Self::NotLoggedIn => Notice::destructive(
                "Требуется авторизация",
                "Пожалуйста, войдите в систему для покупки аккаунта",
            ),
            Self::InsufficientBalance { .. } => Notice::destructive(
                "Недостаточно средств",
                "Пополните баланс для совершения покупки",
            ),
            Self::ListingNotFound(id) => {
                Notice::destructive("Аккаунт не найден", format!("Нет объявления с номером {id}"))
            }
            Self::Price(_) => Notice::destructive("Ошибка", "Слишком большая сумма"),
            Self::BadInput(msg) => Notice::destructive("Некорректный ввод", msg.clone()),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
