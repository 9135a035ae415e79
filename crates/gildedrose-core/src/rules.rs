//! # Rules Module
//!
//! The quality update rule engine.
//!
//! Four rules are evaluated on every call, each independently, in this order:
//!
//! 1. `Decrease`: generic items lose one quality point while above zero.
//! 2. `Increase`: Aged Brie and unexpired backstage passes gain one point while
//!    below 50.
//! 3. `AcceleratedIncrease`: unexpired backstage passes gain one more point
//!    while below 50.
//! 4. `Collapse`: expired backstage passes drop to zero.
//!
//! Every rule carries its own range guard, so quality never leaves
//! `MIN_QUALITY..=MAX_QUALITY` through an increment or decrement. Legendary
//! items match no guard at all and are therefore left untouched.

use crate::category::Category;
use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One business rule of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Generic items lose one point while above zero.
    Decrease,
    /// Aged Brie and unexpired passes gain one point while below 50.
    Increase,
    /// Unexpired passes gain one more point while below 50.
    AcceleratedIncrease,
    /// Expired passes drop to zero.
    Collapse,
}

impl Rule {
    /// All rules in evaluation order. `Collapse` must stay last.
    pub const ALL: [Rule; 4] = [
        Rule::Decrease,
        Rule::Increase,
        Rule::AcceleratedIncrease,
        Rule::Collapse,
    ];

    /// Whether this rule's guard holds for the item in its current state.
    ///
    /// The category is passed in so callers classify once per update.
    #[must_use]
    pub fn applies(self, category: Category, item: &Item) -> bool {
        match self {
            Rule::Decrease => !category.is_special() && item.quality > MIN_QUALITY,
            Rule::Increase => {
                let eligible = match category {
                    Category::AgedBrie => true,
                    Category::BackstagePass => !item.is_expired(),
                    Category::Generic | Category::Legendary => false,
                };
                eligible && item.quality < MAX_QUALITY
            }
            Rule::AcceleratedIncrease => {
                category == Category::BackstagePass
                    && !item.is_expired()
                    && item.quality < MAX_QUALITY
            }
            Rule::Collapse => {
                category == Category::BackstagePass
                    && item.is_expired()
                    && item.quality > MIN_QUALITY
            }
        }
    }

    /// Apply this rule's effect unconditionally.
    fn fire(self, item: &mut Item) {
        match self {
            Rule::Decrease => item.quality -= 1,
            Rule::Increase | Rule::AcceleratedIncrease => item.quality += 1,
            Rule::Collapse => item.quality = MIN_QUALITY,
        }
    }
}

/// What a single update did to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Category the item was classified into.
    pub category: Category,
    /// Quality before any rule ran.
    pub quality_before: i32,
    /// Quality after the last rule ran.
    pub quality_after: i32,
    /// Rules that fired, in evaluation order.
    pub fired: Vec<Rule>,
}

impl Transition {
    /// Net quality change.
    #[must_use]
    pub fn delta(&self) -> i32 {
        self.quality_after - self.quality_before
    }

    /// Whether any rule fired.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.fired.is_empty()
    }
}

/// Run every rule against the item and report which ones fired.
///
/// Each guard is checked against the item as left by the previous rule.
pub fn apply_rules(item: &mut Item) -> Transition {
    let category = item.category();
    let quality_before = item.quality;
    let mut fired = Vec::new();

    for rule in Rule::ALL {
        if rule.applies(category, item) {
            rule.fire(item);
            trace!(name = %item.name, ?rule, quality = item.quality, "rule fired");
            fired.push(rule);
        }
    }

    Transition {
        category,
        quality_before,
        quality_after: item.quality,
        fired,
    }
}

/// Advance the item's quality by one time step.
///
/// Only `quality` is written. Input is not validated.
pub fn update_quality(item: &mut Item) {
    apply_rules(item);
}

// =============================================================================
// TESTS
// =============================================================================
