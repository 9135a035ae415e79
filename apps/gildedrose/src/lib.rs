//! # Gilded Rose Library
//!
//! This library exposes the app modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod logging;

// Re-export gildedrose_core for convenience
pub use gildedrose_core;
