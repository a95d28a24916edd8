//! Command implementations for the forecast calendar CLI
//!
//! Each command is implemented in its own module:
//! - `calendar`: 24-row calendar with one glyph per hour
//! - `hours`: hourly listing as text or JSON
//! - `thresholds`: threshold table validation and display

pub mod calendar;
pub mod hours;
pub mod shared;
pub mod thresholds;

pub use shared::exit_code;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner for the forecast calendar
///
/// Sets up logging, then dispatches to the subcommand handler. Does
/// nothing when no subcommand was given.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args);

    match args.command {
        Some(Commands::Calendar(calendar_args)) => calendar::run_calendar(calendar_args),
        Some(Commands::Hours(hours_args)) => hours::run_hours(hours_args),
        Some(Commands::Thresholds(thresholds_args)) => {
            thresholds::run_thresholds(thresholds_args)
        }
        None => Ok(()),
    }
}
