//! # Shop Module
//!
//! Day-by-day simulation over an inventory.
//!
//! The rule engine only updates quality. Moving the countdown forward is the
//! caller's job, and the shop is that caller: each day it runs the engine on
//! every item and then decrements `sell_in` for everything that can be sold.

use crate::category::Category;
use crate::item::Item;
use crate::rules::{apply_rules, update_quality, Transition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inventory state at the end of a given day. Day 0 is the initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

/// An inventory that can be advanced one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
    day: u32,
}

impl Shop {
    /// Create a shop on day 0.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    /// Current items.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of days advanced so far.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Consume the shop and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day.
    pub fn advance_day(&mut self) {
        for item in &mut self.items {
            update_quality(item);
            tick_countdown(item);
        }
        self.day = self.day.saturating_add(1);
        debug!(day = self.day, items = self.items.len(), "advanced day");
    }

    /// Advance every item by one day and report each item's quality change.
    ///
    /// Transitions are in inventory order.
    pub fn advance_day_explained(&mut self) -> Vec<Transition> {
        let transitions = self
            .items
            .iter_mut()
            .map(|item| {
                let transition = apply_rules(item);
                tick_countdown(item);
                transition
            })
            .collect();
        self.day = self.day.saturating_add(1);
        debug!(day = self.day, items = self.items.len(), "advanced day");
        transitions
    }

    /// Snapshot the current state, then advance `days` times, snapshotting
    /// after each day.
    ///
    /// Always returns `days + 1` snapshots. Use [`Shop::days`] to consume them
    /// one at a time instead of holding them all.
    pub fn simulate(&mut self, days: u32) -> Vec<DaySnapshot> {
        self.days(days).collect()
    }

    /// Lazily yield the current state followed by one snapshot per advanced day.
    ///
    /// Each day is only simulated when the iterator is polled.
    pub fn days(&mut self, days: u32) -> Days<'_> {
        Days {
            shop: self,
            remaining: days,
            started: false,
        }
    }

    /// Current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            day: self.day,
            items: self.items.clone(),
        }
    }
}

/// Iterator returned by [`Shop::days`].
#[derive(Debug)]
pub struct Days<'a> {
    shop: &'a mut Shop,
    remaining: u32,
    started: bool,
}

impl Iterator for Days<'_> {
    type Item = DaySnapshot;

    fn next(&mut self) -> Option<DaySnapshot> {
        if !self.started {
            self.started = true;
            return Some(self.shop.snapshot());
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.shop.advance_day();
        Some(self.shop.snapshot())
    }
}

/// Legendary items are never sold, so their countdown stays put.
fn tick_countdown(item: &mut Item) {
    if item.category() != Category::Legendary {
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

// =============================================================================
// TESTS
// =============================================================================
