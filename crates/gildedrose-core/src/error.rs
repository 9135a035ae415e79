//! # Error Module
//!
//! The rule engine itself never fails. These errors only come from building
//! or parsing inventories.

use thiserror::Error;

/// Errors from inventory construction and parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// Quality outside `MIN_QUALITY..=MAX_QUALITY` for a non-legendary item.
    #[error("item '{name}' has quality {quality}, expected 0..=50")]
    InvalidQuality { name: String, quality: i32 },

    /// Item name is empty.
    #[error("item name must not be empty")]
    EmptyName,

    /// Inventory JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
