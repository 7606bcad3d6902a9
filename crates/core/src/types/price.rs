//! Whole-rouble price representation.
//!
//! Prices and balances are stored as whole roubles with no minor unit, so a
//! plain `u64` is exact. Display follows the `ru-RU` locale: digits grouped by
//! thousands with a no-break space and the `₽` sign after the amount.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Digit group separator used by the `ru-RU` number format.
const GROUP_SEPARATOR: char = '\u{a0}';

/// Adding two prices would exceed `u64::MAX`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("price overflow: {left} + {right}")]
pub struct PriceOverflow {
    /// Left operand.
    pub left: Price,
    /// Right operand.
    pub right: Price,
}

/// A non-negative amount of roubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero roubles.
    pub const ZERO: Self = Self(0);

    /// Create a price from whole roubles.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole roubles.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Subtract `other`, or `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Add `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceOverflow`] if the sum does not fit in a `u64`.
    pub const fn checked_add(self, other: Self) -> Result<Self, PriceOverflow> {
        match self.0.checked_add(other.0) {
            Some(amount) => Ok(Self(amount)),
            None => Err(PriceOverflow {
                left: self,
                right: other,
            }),
        }
    }

    /// The amount grouped by thousands without the currency sign (`"15 000"`).
    #[must_use]
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.grouped())
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).fold(0, u64::saturating_add))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amount() {
        assert_eq!(Price::new(999).to_string(), "999 ₽");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::new(4999).to_string(), "4\u{a0}999 ₽");
        assert_eq!(Price::new(15000).to_string(), "15\u{a0}000 ₽");
        assert_eq!(
            Price::new(1_234_567).to_string(),
            "1\u{a0}234\u{a0}567 ₽"
        );
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Price::ZERO.to_string(), "0 ₽");
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            Price::new(15000).checked_sub(Price::new(4999)),
            Some(Price::new(10001))
        );
        assert_eq!(Price::new(100).checked_sub(Price::new(101)), None);
        assert_eq!(Price::new(100).checked_sub(Price::new(100)), Some(Price::ZERO));
    }

    #[test]
    fn test_checked_add_overflow() {
        let err = Price::new(u64::MAX)
            .checked_add(Price::new(1))
            .expect_err("must overflow");
        assert_eq!(err.right, Price::new(1));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(1299), Price::new(2499)].into_iter().sum();
        assert_eq!(total, Price::new(3798));
    }

    #[test]
    fn test_ordering_matches_amount() {
        assert!(Price::new(2999) < Price::new(3000));
        assert!(Price::new(5000) >= Price::new(5000));
    }
}
