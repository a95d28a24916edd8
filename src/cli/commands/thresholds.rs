//! Thresholds command implementation
//!
//! Validates a threshold table file, or shows the built-in table, and
//! prints it as JSON.

use crate::cli::args::ThresholdsArgs;
use crate::config::ThresholdTable;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

/// Thresholds command runner
pub fn run_thresholds(args: ThresholdsArgs) -> Result<()> {
    let table = match &args.file {
        Some(path) => {
            let table = ThresholdTable::from_file(path)
                .with_context(|| format!("Invalid threshold table {}", path.display()))?;
            info!("Threshold table {} is valid", path.display());
            eprintln!("{} {}", "Valid threshold table:".bright_green(), path.display());
            table
        }
        None => ThresholdTable::default(),
    };

    println!("{}", render_table(&table)?);
    Ok(())
}

/// Pretty-printed JSON rangeDict
pub fn render_table(table: &ThresholdTable) -> Result<String> {
    serde_json::to_string_pretty(&table.to_value()).context("Failed to serialize threshold table")
}
