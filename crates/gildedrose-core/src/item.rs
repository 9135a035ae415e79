//! # Item Module
//!
//! The single record the engine operates on.

use crate::category::Category;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest quality the rules will decrease to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality the rules will increase to.
pub const MAX_QUALITY: i32 = 50;

/// An item in the inventory.
///
/// The engine only ever writes `quality`. `name` and `sell_in` belong to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item name. Determines the category.
    pub name: String,
    /// Days left until the sell-by event. Negative once the event has passed.
    #[serde(alias = "sellIn")]
    pub sell_in: i32,
    /// Quality score, normally within `MIN_QUALITY..=MAX_QUALITY`.
    pub quality: i32,
}

impl Item {
    /// Create an item without checking any bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Create an item, rejecting an empty name or an out-of-range quality.
    ///
    /// Legendary items are exempt from the quality bound.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> Result<Self> {
        let item = Self::new(name, sell_in, quality);
        item.validate()?;
        Ok(item)
    }

    /// Check the name and the quality bound.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.category() != Category::Legendary && !self.quality_in_bounds() {
            return Err(Error::InvalidQuality {
                name: self.name.clone(),
                quality: self.quality,
            });
        }
        Ok(())
    }

    /// Classify this item by its name.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Whether the sell-by event has passed (`sell_in < 0`).
    ///
    /// A countdown of exactly zero is not expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Whether quality lies within `MIN_QUALITY..=MAX_QUALITY`.
    #[must_use]
    pub fn quality_in_bounds(&self) -> bool {
        (MIN_QUALITY..=MAX_QUALITY).contains(&self.quality)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn display_matches_report_row() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");
    }

    #[test]
    fn zero_countdown_is_not_expired() {
        assert!(!Item::new("x", 0, 1).is_expired());
        assert!(Item::new("x", -1, 1).is_expired());
    }

    #[test]
    fn try_new_rejects_out_of_range_quality() {
        let err = Item::try_new("Elixir of the Mongoose", 5, 51).unwrap_err();
        assert!(matches!(err, Error::InvalidQuality { quality: 51, .. }));

        assert!(Item::try_new("Elixir of the Mongoose", 5, -1).is_err());
        assert!(Item::try_new("Elixir of the Mongoose", 5, 50).is_ok());
    }

    #[test]
    fn try_new_allows_legendary_quality() {
        let item = Item::try_new("Sulfuras, Hand of Ragnaros", 0, 80).unwrap();
        assert_eq!(item.quality, 80);
    }

    #[test]
    fn try_new_rejects_empty_name() {
        assert!(matches!(Item::try_new("", 1, 1), Err(Error::EmptyName)));
    }

    #[test]
    fn deserializes_camel_case_countdown() {
        let item: Item =
            serde_json::from_str(r#"{"name": "Aged Brie", "sellIn": 2, "quality": 0}"#).unwrap();
        assert_eq!(item, Item::new("Aged Brie", 2, 0));
    }

    #[test]
    fn item_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Item>();
    }
}
