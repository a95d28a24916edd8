//! Command-line argument definitions for the forecast calendar
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is a local display collaborator: it reads an already-fetched DWML
//! document and renders what the pipeline produces.

use crate::config::{PipelineConfig, ThresholdTable};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the forecast calendar
///
/// Turns an NDFD DWML time-series document into an hour-by-day calendar
/// rated for outdoor activities.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "forecast-calendar",
    version,
    about = "Render an NDFD DWML forecast as an hour-by-day desirability calendar",
    long_about = "Reads an NDFD DWML time-series document (precipitation probability, \
                  temperature, wind speed and optional cloud cover), rebuilds a gap-free \
                  hourly sequence, rates every hour against a threshold table and prints \
                  it as a 24-row calendar or an hourly listing."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands for the forecast calendar
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the 24-row calendar with one column per day
    Calendar(CalendarArgs),
    /// Print the canonical hourly sequence with ratings and icons
    Hours(HoursArgs),
    /// Validate a threshold table, or show the default one
    Thresholds(ThresholdsArgs),
}

/// Where the forecast comes from and how it is rated
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ForecastSource {
    /// DWML document to read
    ///
    /// Reads standard input when not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "DWML document to read (default: stdin)"
    )]
    pub input: Option<PathBuf>,

    /// Threshold table ("rangeDict") as JSON
    ///
    /// Must carry the keys precip, temp, wind and clouds. Uses the built-in
    /// table when not specified.
    #[arg(
        short = 't',
        long = "thresholds",
        value_name = "FILE",
        help = "JSON threshold table (default: built-in table)"
    )]
    pub thresholds: Option<PathBuf>,

    /// Ignore cloud cover samples
    #[arg(long = "no-clouds", help = "Ignore cloud cover samples")]
    pub no_clouds: bool,
}

/// Arguments for the calendar command
#[derive(Debug, Clone, Parser)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub source: ForecastSource,

    /// Disable colored output
    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,
}

/// Arguments for the hours command
#[derive(Debug, Clone, Parser)]
pub struct HoursArgs {
    #[command(flatten)]
    pub source: ForecastSource,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the hourly listing"
    )]
    pub format: OutputFormat,
}

/// Arguments for the thresholds command
#[derive(Debug, Clone, Parser)]
pub struct ThresholdsArgs {
    /// Threshold table to validate
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "JSON threshold table to validate (default: show built-in table)"
    )]
    pub file: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ForecastSource {
    /// Check that the named files exist
    pub fn validate(&self) -> Result<()> {
        for path in [&self.input, &self.thresholds].into_iter().flatten() {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "File does not exist: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Load the threshold table, falling back to the built-in one
    pub fn threshold_table(&self) -> Result<ThresholdTable> {
        match &self.thresholds {
            Some(path) => ThresholdTable::from_file(path),
            None => Ok(ThresholdTable::default()),
        }
    }

    /// Build the pipeline configuration these arguments describe
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig::default().with_thresholds(self.threshold_table()?);
        if self.no_clouds {
            Ok(config.without_cloud_cover())
        } else {
            Ok(config)
        }
    }
}
