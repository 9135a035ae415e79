//! # CLI Module
//!
//! Command-line interface for the Gilded Rose simulator.
//!
//! Each subcommand is a `cmd_*` function that writes its output to the given
//! writer, so tests can call them directly.

use clap::{Parser, Subcommand};
use gildedrose_core::{Category, Item, Shop, parse_inventory, render_day, standard_inventory};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// The inventory could not be parsed or is invalid.
    #[error(transparent)]
    Inventory(#[from] gildedrose_core::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Gilded Rose inventory simulator.
#[derive(Debug, Parser)]
#[command(name = "gildedrose", version, about)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the inventory day by day.
    Simulate {
        /// Number of days to advance.
        #[arg(short, long, default_value_t = 2)]
        days: u32,

        /// JSON inventory file. Defaults to the standard inventory.
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Emit snapshots as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Advance a JSON inventory file by one day.
    Update {
        /// JSON inventory file to read.
        #[arg(short, long)]
        items: PathBuf,

        /// Where to write the result. Defaults to overwriting the input.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print which rules fired for each item.
        #[arg(long)]
        explain: bool,
    },

    /// Print the category an item name falls into.
    Classify {
        /// Item name, matched exactly.
        name: String,
    },
}

// =============================================================================
// FILE I/O
// =============================================================================

/// Load an inventory from a JSON file, or the standard inventory if no path
/// is given.
pub fn load_inventory(path: Option<&Path>) -> Result<Vec<Item>, CliError> {
    let Some(path) = path else {
        return Ok(standard_inventory());
    };
    let content = std::fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_inventory(&content)?)
}

/// Write an inventory to a JSON file.
///
/// The JSON goes to a temporary file in the target's directory, which is then
/// renamed over the target, so a failed write never leaves a truncated file.
pub fn save_inventory(path: &Path, items: &[Item]) -> Result<(), CliError> {
    let file_error = |source: std::io::Error| CliError::File {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(file_error)?;
    serde_json::to_writer_pretty(&mut tmp, items)?;
    writeln!(tmp).map_err(file_error)?;
    tmp.as_file().sync_all().map_err(file_error)?;
    tmp.persist(path).map_err(|err| file_error(err.error))?;
    Ok(())
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run a simulation and print the report.
///
/// Each day is written as soon as it is simulated, so memory stays flat no
/// matter how many days are requested. JSON output is still a single array.
pub fn cmd_simulate(
    out: &mut impl Write,
    days: u32,
    items: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let inventory = load_inventory(items)?;
    info!(days, items = inventory.len(), "simulating");

    let mut shop = Shop::new(inventory);
    if json {
        write!(out, "[")?;
        for (index, snapshot) in shop.days(days).enumerate() {
            if index > 0 {
                write!(out, ",")?;
            }
            writeln!(out)?;
            serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        }
        writeln!(out, "\n]")?;
    } else {
        for snapshot in shop.days(days) {
            out.write_all(render_day(&snapshot).as_bytes())?;
        }
    }
    Ok(())
}

/// Advance an inventory file by one day.
pub fn cmd_update(
    out: &mut impl Write,
    items: &Path,
    output: Option<&Path>,
    explain: bool,
) -> Result<(), CliError> {
    let mut shop = Shop::new(load_inventory(Some(items))?);
    let transitions = shop.advance_day_explained();

    if explain {
        for (item, transition) in shop.items().iter().zip(&transitions) {
            let fired: Vec<String> = transition
                .fired
                .iter()
                .map(|rule| format!("{rule:?}"))
                .collect();
            writeln!(
                out,
                "{} [{}]: {} -> {} ({})",
                item.name,
                transition.category,
                transition.quality_before,
                transition.quality_after,
                if fired.is_empty() {
                    "no rules".to_string()
                } else {
                    fired.join(", ")
                }
            )?;
        }
    }

    let target = output.unwrap_or(items);
    save_inventory(target, shop.items())?;
    info!(path = %target.display(), items = shop.items().len(), "inventory updated");
    Ok(())
}

/// Print the category of a name.
pub fn cmd_classify(out: &mut impl Write, name: &str) -> Result<(), CliError> {
    writeln!(out, "{}", Category::classify(name))?;
    Ok(())
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Simulate { days, items, json } => {
            cmd_simulate(out, days, items.as_deref(), json)
        }
        Commands::Update {
            items,
            output,
            explain,
        } => cmd_update(out, &items, output.as_deref(), explain),
        Commands::Classify { name } => cmd_classify(out, &name),
    }
}
