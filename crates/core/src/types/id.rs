//! Newtype IDs for type-safe entity references.
//!
//! Sequence-style identifiers are declared with `define_id!`; catalog
//! listings use string identifiers and get their own [`ListingId`] type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe sequence ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_u64()`, `next()`
/// - `From<u64>` and `Into<u64>` implementations
///
/// # Example
///
/// ```rust
/// # use levelup_core::define_id;
/// define_id!(TicketId);
/// define_id!(BatchId);
///
/// let ticket = TicketId::new(1);
/// assert_eq!(ticket.next().as_u64(), 2);
///
/// // These are different types, so this won't compile:
/// // let _: TicketId = BatchId::new(1);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// The ID that follows this one in creation order.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ChatMessageId);

/// Catalog listing identifier.
///
/// Seeded listings use short numeric strings (`"1"`, `"2"`, ...); listings a
/// user puts up for sale get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Create a listing ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ListingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_next_is_monotonic() {
        let first = ChatMessageId::new(1);
        assert!(first.next() > first);
        assert_eq!(first.next().as_u64(), 2);
    }

    #[test]
    fn test_message_id_next_saturates() {
        let last = ChatMessageId::new(u64::MAX);
        assert_eq!(last.next(), last);
    }

    #[test]
    fn test_listing_id_serializes_transparently() {
        let id = ListingId::new("4");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"4\"");
    }

    #[test]
    fn test_listing_id_display() {
        assert_eq!(ListingId::from("abc").to_string(), "abc");
    }
}
