//! # Category Module
//!
//! Closed classification of item names.
//!
//! The name is matched exactly, once, and every rule works off the resulting
//! variant instead of comparing strings again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the aged cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert backstage pass.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// The category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Anything without special handling. Loses quality over time.
    Generic,
    /// Gains quality over time.
    AgedBrie,
    /// Gains quality as the event approaches, worthless once it has passed.
    BackstagePass,
    /// Quality never changes.
    Legendary,
}

impl Category {
    /// Classify an item name. Unknown names are [`Category::Generic`].
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASS => Self::BackstagePass,
            SULFURAS => Self::Legendary,
            _ => Self::Generic,
        }
    }

    /// Categories that do not lose quality with age.
    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Stable lowercase label, used by the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::AgedBrie => "aged_brie",
            Self::BackstagePass => "backstage_pass",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
