//! # Gilded Rose Core
//!
//! The deterministic quality engine for the Gilded Rose inventory.
//!
//! An [`Item`] carries a name, a countdown to its sell-by event (`sell_in`) and
//! a bounded quality score. Once per simulated day the caller hands each item
//! to [`update_quality`], which classifies the item into a [`Category`] and
//! evaluates a fixed, ordered set of [`Rule`]s against it.
//!
//! ```
//! use gildedrose_core::{update_quality, Item};
//!
//! let mut brie = Item::new("Aged Brie", 2, 0);
//! update_quality(&mut brie);
//! assert_eq!(brie.quality, 1);
//! assert_eq!(brie.sell_in, 2);
//! ```
//!
//! ## Layout
//!
//! - [`item`]: the record and its quality bounds
//! - [`category`]: closed classification of item names
//! - [`rules`]: the quality update rule engine
//! - [`shop`]: day-by-day simulation over an inventory
//! - [`fixture`]: the standard inventory and the text report
//! - [`error`]: errors for inventory parsing and validation

pub mod category;
pub mod error;
pub mod fixture;
pub mod item;
pub mod rules;
pub mod shop;

pub use category::Category;
pub use error::{Error, Result};
pub use fixture::{
    parse_inventory, render_day, render_report, standard_inventory, validate_inventory,
};
pub use item::{Item, MAX_QUALITY, MIN_QUALITY};
pub use rules::{apply_rules, update_quality, Rule, Transition};
pub use shop::{DaySnapshot, Days, Shop};
