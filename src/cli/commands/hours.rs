//! Hours command implementation
//!
//! Prints the canonical hourly sequence with each hour's rating and icons,
//! as text or as JSON.

use super::shared::{load_forecast, tier_label};
use crate::app::models::{HourDesirability, HourRecord};
use crate::app::services::desirability::IconSelection;
use crate::app::services::pipeline::Forecast;
use crate::cli::args::{HoursArgs, OutputFormat};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// One hour as reported by the hours command
#[derive(Debug, Clone, Serialize)]
pub struct HourReport<'a> {
    #[serde(flatten)]
    pub record: &'a HourRecord,
    pub desirability: Option<HourDesirability>,
    pub icons: Option<IconSelection>,
}

/// Hours command runner
pub fn run_hours(args: HoursArgs) -> Result<()> {
    debug!("Hours arguments: {:?}", args);

    let forecast = load_forecast(&args.source)?;
    let output = match args.format {
        OutputFormat::Text => render_text(&forecast),
        OutputFormat::Json => render_json(&forecast)?,
    };

    println!("{}", output);
    Ok(())
}

/// Build the per-hour reports for a forecast
pub fn hour_reports(forecast: &Forecast) -> Vec<HourReport<'_>> {
    forecast
        .hours()
        .iter()
        .map(|record| HourReport {
            record,
            desirability: forecast.desirability(record),
            icons: forecast.icons(record),
        })
        .collect()
}

/// One line per hour: the record, its rating and any icons
pub fn render_text(forecast: &Forecast) -> String {
    hour_reports(forecast)
        .iter()
        .map(|report| {
            let icons = report.icons.map(describe_icons).unwrap_or_default();
            if icons.is_empty() {
                format!("{} | {}", report.record, tier_label(report.desirability))
            } else {
                format!(
                    "{} | {} | {}",
                    report.record,
                    tier_label(report.desirability),
                    icons
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of hour reports
pub fn render_json(forecast: &Forecast) -> Result<String> {
    serde_json::to_string_pretty(&hour_reports(forecast)).context("Failed to serialize hours")
}

fn describe_icons(icons: IconSelection) -> String {
    let names: Vec<String> = [
        icons.weather.map(|icon| format!("{:?}", icon)),
        icons.temperature.map(|icon| format!("{:?}", icon)),
        icons.wind.map(|icon| format!("{:?}", icon)),
    ]
    .into_iter()
    .flatten()
    .collect();
    names.join(", ")
}
