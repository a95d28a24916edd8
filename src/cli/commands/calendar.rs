//! Calendar command implementation
//!
//! Prints the weekday header and the 24-row grid. Each cell is a glyph for
//! the hour's overall rating; padding hours outside the forecast are blank.

use super::shared::load_forecast;
use crate::app::models::{HourDesirability, HourRecord};
use crate::app::services::calendar::CalendarGrid;
use crate::app::services::pipeline::Forecast;
use crate::cli::args::CalendarArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

/// Calendar command runner
pub fn run_calendar(args: CalendarArgs) -> Result<()> {
    debug!("Calendar arguments: {:?}", args);

    let forecast = load_forecast(&args.source)?;
    let grid = forecast
        .calendar()
        .context("Failed to project forecast onto calendar")?;

    print!("{}", render_calendar(&forecast, &grid, !args.no_color));
    Ok(())
}

/// Render a calendar grid as text, one line per hour of day
pub fn render_calendar(forecast: &Forecast, grid: &CalendarGrid, use_color: bool) -> String {
    let mut output = String::new();

    let header: Vec<String> = grid.header.iter().map(|label| format!("{:>2}", label)).collect();
    let header = format!("   {}", header.join(""));
    if use_color {
        output.push_str(&format!("{}\n", header.bright_cyan().bold()));
    } else {
        output.push_str(&format!("{}\n", header));
    }

    for (hour_of_day, row) in grid.rows.iter().enumerate() {
        output.push_str(&format!("{:02} ", hour_of_day));
        for record in row {
            output.push(' ');
            output.push_str(&render_cell(forecast, record, use_color));
        }
        output.push('\n');
    }

    output
}

fn render_cell(forecast: &Forecast, record: &HourRecord, use_color: bool) -> String {
    let tier = forecast.desirability(record);
    let glyph = tier_glyph(tier);
    if !use_color {
        return glyph.to_string();
    }

    match tier {
        Some(HourDesirability::High) => glyph.bright_green().to_string(),
        Some(HourDesirability::MediumHigh) => glyph.green().to_string(),
        Some(HourDesirability::MediumLow) => glyph.yellow().to_string(),
        Some(HourDesirability::Low) => glyph.red().to_string(),
        None => glyph.to_string(),
    }
}

/// Glyph for an hour's overall rating; blank for padding hours
pub fn tier_glyph(tier: Option<HourDesirability>) -> &'static str {
    match tier {
        Some(HourDesirability::High) => "█",
        Some(HourDesirability::MediumHigh) => "▓",
        Some(HourDesirability::MediumLow) => "▒",
        Some(HourDesirability::Low) => "░",
        None => " ",
    }
}
