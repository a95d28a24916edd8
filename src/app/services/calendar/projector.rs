//! Calendar grid projection
//!
//! Lays a gap-free hourly sequence out as 24 rows (hour of day) by one
//! column per calendar day. The source may change UTC offset part way
//! through a sequence for the same location, so every timestamp is first
//! re-derived as a fixed one-hour step from the first hour. Stored offsets
//! are never used for indexing.

use crate::app::models::HourRecord;
use crate::constants::{HOURS_PER_DAY, WEEKDAY_LABELS};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, Timelike};
use serde::Serialize;
use tracing::debug;

/// A 24-row, one-column-per-day view of an hourly sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    /// Weekday label of each column
    pub header: Vec<&'static str>,

    /// `rows[hour_of_day][day]`
    pub rows: Vec<Vec<HourRecord>>,
}

impl CalendarGrid {
    /// Project a gap-free hourly sequence
    pub fn project(hours: &[HourRecord]) -> Result<Self> {
        let grid = Self {
            header: header_row(hours)?,
            rows: as_calendar_rows(hours)?,
        };
        debug!(
            "Projected {} hours onto a {}x{} calendar",
            hours.len(),
            grid.rows.len(),
            grid.day_count()
        );
        Ok(grid)
    }

    /// Number of calendar days spanned
    pub fn day_count(&self) -> usize {
        self.header.len()
    }

    /// Record at an hour of day on a day column
    pub fn cell(&self, hour_of_day: usize, day: usize) -> Option<&HourRecord> {
        self.rows.get(hour_of_day).and_then(|row| row.get(day))
    }

    /// Records of one day column, midnight first
    pub fn day(&self, day: usize) -> Vec<&HourRecord> {
        self.rows.iter().filter_map(|row| row.get(day)).collect()
    }
}

fn first_timestamp(hours: &[HourRecord]) -> Result<DateTime<FixedOffset>> {
    hours
        .first()
        .map(|hour| hour.timestamp)
        .ok_or_else(|| Error::invalid_argument("cannot project an empty hour sequence"))
}

/// Copy the sequence with every timestamp set to `first + k` hours
///
/// All re-derived timestamps carry the first record's offset. Values are
/// untouched.
pub fn rederive_timestamps(hours: &[HourRecord]) -> Vec<HourRecord> {
    let Some(first) = hours.first().map(|hour| hour.timestamp) else {
        return Vec::new();
    };

    hours
        .iter()
        .zip(0i64..)
        .map(|(hour, k)| hour.with_timestamp(first + TimeDelta::hours(k)))
        .collect()
}

/// Weekday labels, one per calendar day spanned, starting at the first
/// hour's weekday
pub fn header_row(hours: &[HourRecord]) -> Result<Vec<&'static str>> {
    let first = first_timestamp(hours)?;
    let last = first + TimeDelta::hours(hours.len() as i64 - 1);

    let days = (last.date_naive() - first.date_naive()).num_days() as usize + 1;
    let start = first.weekday().num_days_from_monday() as usize;

    Ok((0..days)
        .map(|day| WEEKDAY_LABELS[(start + day) % WEEKDAY_LABELS.len()])
        .collect())
}

/// Pad the re-derived sequence out to whole days and bucket it by hour of day
///
/// Cell `(h, d)` of the result is the hour `h + 24 * d` of the padded
/// sequence. Padding hours are empty records.
pub fn as_calendar_rows(hours: &[HourRecord]) -> Result<Vec<Vec<HourRecord>>> {
    let first = first_timestamp(hours)?;
    let rederived = rederive_timestamps(hours);
    let last = first + TimeDelta::hours(rederived.len() as i64 - 1);

    let head_len = first.hour() as i64;
    let tail_len = (HOURS_PER_DAY as i64 - 1) - last.hour() as i64;

    let head = (1..=head_len)
        .rev()
        .map(|k| HourRecord::empty(first - TimeDelta::hours(k)));
    let tail = (1..=tail_len).map(|k| HourRecord::empty(last + TimeDelta::hours(k)));

    let padded: Vec<HourRecord> = head.chain(rederived).chain(tail).collect();
    debug_assert_eq!(padded.len() % HOURS_PER_DAY, 0, "padding must fill whole days");

    let days = padded.len() / HOURS_PER_DAY;
    let rows = (0..HOURS_PER_DAY)
        .map(|hour_of_day| {
            (0..days)
                .map(|day| padded[hour_of_day + HOURS_PER_DAY * day].clone())
                .collect()
        })
        .collect();
    Ok(rows)
}
