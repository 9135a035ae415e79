//! Diagnostic tracing for the CLI.
//!
//! Reports go to stdout. Tracing goes to stderr so the two never mix.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `debug` when `verbose` is set, `warn`
/// otherwise.
///
/// # Example
/// ```bash
/// RUST_LOG=gildedrose_core=trace gildedrose simulate --days 3
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
