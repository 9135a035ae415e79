//! # Fixture Module
//!
//! The standard inventory, JSON inventory parsing, and the plain-text day report.
//!
//! Parsing only converts text into items. Reading the file stays in the app layer.

use crate::category::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};
use crate::error::Result;
use crate::item::Item;
use crate::shop::DaySnapshot;

/// Header row printed under every day banner.
pub const REPORT_HEADER: &str = "name, sellIn, quality";

/// The classic starting inventory.
#[must_use]
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        // Conjured items have no rule of their own and age like any other.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Check every item in an inventory, stopping at the first invalid one.
pub fn validate_inventory(items: &[Item]) -> Result<()> {
    items.iter().try_for_each(Item::validate)
}

/// Parse a JSON array of items and validate it.
pub fn parse_inventory(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    validate_inventory(&items)?;
    Ok(items)
}

/// Render one day in the fixture's text format.
///
/// ```text
/// -------- day 0 --------
/// name, sellIn, quality
/// Aged Brie, 2, 0
///
/// ```
#[must_use]
pub fn render_day(snapshot: &DaySnapshot) -> String {
    let mut out = format!("-------- day {} --------\n", snapshot.day);
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for item in &snapshot.items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Render a run of snapshots, one day block after another.
#[must_use]
pub fn render_report(snapshots: &[DaySnapshot]) -> String {
    snapshots.iter().map(render_day).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;
    use crate::shop::Shop;

    #[test]
    fn standard_inventory_is_valid() {
        assert!(validate_inventory(&standard_inventory()).is_ok());
        assert_eq!(standard_inventory().len(), 9);
    }

    #[test]
    fn parse_accepts_both_countdown_spellings() {
        let json = r#"[
            {"name": "Aged Brie", "sell_in": 2, "quality": 0},
            {"name": "Normal Item", "sellIn": 5, "quality": 3}
        ]"#;
        let items = parse_inventory(json).unwrap();
        assert_eq!(
            items,
            vec![Item::new("Aged Brie", 2, 0), Item::new("Normal Item", 5, 3)]
        );
    }

    #[test]
    fn parse_rejects_out_of_range_quality() {
        let json = r#"[{"name": "Normal Item", "sell_in": 5, "quality": 99}]"#;
        let err = parse_inventory(json).unwrap_err();
        assert!(matches!(err, Error::InvalidQuality { quality: 99, .. }));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(parse_inventory("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn report_renders_day_blocks() {
        let mut shop = Shop::new(vec![Item::new("Aged Brie", 2, 0)]);
        let report = render_report(&shop.simulate(1));

        let expected = "\
-------- day 0 --------
name, sellIn, quality
Aged Brie, 2, 0

-------- day 1 --------
name, sellIn, quality
Aged Brie, 1, 1

";
        assert_eq!(report, expected);
    }

    #[test]
    fn report_is_concatenated_days() {
        let snapshots = Shop::new(standard_inventory()).simulate(2);
        let joined: String = snapshots.iter().map(render_day).collect();
        assert_eq!(render_report(&snapshots), joined);
    }

    #[test]
    fn standard_inventory_after_one_day() {
        let mut shop = Shop::new(standard_inventory());
        shop.advance_day();

        let rows: Vec<String> = shop.items().iter().map(ToString::to_string).collect();
        assert_eq!(
            rows,
            vec![
                "+5 Dexterity Vest, 9, 19",
                "Aged Brie, 1, 1",
                "Elixir of the Mongoose, 4, 6",
                "Sulfuras, Hand of Ragnaros, 0, 80",
                "Sulfuras, Hand of Ragnaros, -1, 80",
                "Backstage passes to a TAFKAL80ETC concert, 14, 22",
                "Backstage passes to a TAFKAL80ETC concert, 9, 50",
                "Backstage passes to a TAFKAL80ETC concert, 4, 50",
                "Conjured Mana Cake, 2, 5",
            ]
        );
    }
}
