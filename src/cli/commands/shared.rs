//! Shared components for CLI commands
//!
//! Logging setup, document loading and pipeline invocation used by every
//! command that renders a forecast.

use crate::app::models::HourDesirability;
use crate::app::services::pipeline::{Forecast, ForecastPipeline};
use crate::cli::args::{Args, ForecastSource};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("forecast_calendar={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Read a DWML document from a file, or from stdin when no path is given
pub fn read_document(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read forecast document {}", path.display())),
        None => {
            let mut xml = String::new();
            std::io::stdin()
                .read_to_string(&mut xml)
                .context("Failed to read forecast document from stdin")?;
            Ok(xml)
        }
    }
}

/// Validate the source arguments, load the document and run the pipeline
pub fn load_forecast(source: &ForecastSource) -> Result<Forecast> {
    source.validate()?;

    let config = source
        .pipeline_config()
        .context("Failed to load threshold table")?;
    let xml = read_document(source.input.as_deref())?;

    let forecast = ForecastPipeline::new(config)
        .run_str(&xml)
        .context("Failed to build forecast")?;
    info!("Loaded forecast with {} hours", forecast.hours().len());
    Ok(forecast)
}

/// Exit code for a failed command
///
/// Data-unavailable errors exit with 2 so callers can tell "no forecast"
/// apart from a broken document or a bad invocation.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    let data_unavailable = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<crate::Error>())
        .any(crate::Error::is_data_unavailable);
    if data_unavailable { 2 } else { 1 }
}

/// Short label for a tier, as used in text output
pub fn tier_label(tier: Option<HourDesirability>) -> &'static str {
    match tier {
        Some(HourDesirability::High) => "high",
        Some(HourDesirability::MediumHigh) => "med-high",
        Some(HourDesirability::MediumLow) => "med-low",
        Some(HourDesirability::Low) => "low",
        None => "-",
    }
}
