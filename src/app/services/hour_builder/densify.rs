//! Forward fill and hourly densification
//!
//! The aligned grid is irregular in two ways: fields are missing where a
//! parameter was not sampled, and hours are missing where nothing was
//! sampled at all. [`forward_fill`] repairs the first, [`trim_incomplete`]
//! drops the records that never became complete, and [`densify_hourly`]
//! repairs the second.

use crate::app::models::HourRecord;
use crate::{Error, Result};
use chrono::TimeDelta;

// =============================================================================
// Forward Fill
// =============================================================================

/// Most recently seen value of each field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryState {
    pub precip: Option<i32>,
    pub temp: Option<i32>,
    pub wind: Option<i32>,
    pub clouds: Option<i32>,
}

impl CarryState {
    /// Fill the record's absent fields from the carried values, then carry
    /// the record's own values forward
    pub fn apply(&mut self, record: &mut HourRecord) {
        if record.precip.is_some() {
            self.precip = record.precip;
        } else {
            record.precip = self.precip;
        }

        if record.temp.is_some() {
            self.temp = record.temp;
        } else {
            record.temp = self.temp;
        }

        if record.wind.is_some() {
            self.wind = record.wind;
        } else {
            record.wind = self.wind;
        }

        if record.clouds.is_some() {
            self.clouds = record.clouds;
        } else {
            record.clouds = self.clouds;
        }
    }
}

/// Carry the last seen value of every field forward through the grid
pub fn forward_fill(records: &mut [HourRecord]) {
    let mut carry = CarryState::default();
    for record in records.iter_mut() {
        carry.apply(record);
    }
}

/// Drop every record still missing precipitation, temperature or wind
///
/// After [`forward_fill`] this only ever removes a leading run. Returns the
/// number of records removed.
pub fn trim_incomplete(records: &mut Vec<HourRecord>) -> usize {
    let before = records.len();
    records.retain(HourRecord::is_complete);
    before - records.len()
}

// =============================================================================
// Densification
// =============================================================================

/// Hour-by-hour sequence from the first to the last gapped record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensifiedHours {
    pub hours: Vec<HourRecord>,

    /// Hours that had no gapped record and were copied from the previous hour
    pub synthesized: usize,
}

/// Walk every hour from the first to the last record, emitting the record
/// found at that instant or a copy of the previously emitted record
///
/// Synthesized hours carry the first record's UTC offset. Fails with an
/// insufficient data error when `gapped` is empty.
pub fn densify_hourly(gapped: &[HourRecord]) -> Result<DensifiedHours> {
    let (first, last) = match (gapped.first(), gapped.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(Error::insufficient_data(
                "no hour has precipitation, temperature and wind together",
            ));
        }
    };

    let one_hour = TimeDelta::hours(1);
    let mut hours: Vec<HourRecord> = Vec::new();
    let mut synthesized = 0;
    let mut cursor = gapped.iter().peekable();
    let mut current = first.timestamp;
    let mut previous = first;

    while current <= last.timestamp {
        while cursor.next_if(|record| record.timestamp < current).is_some() {}

        match cursor.next_if(|record| record.timestamp == current) {
            Some(found) => {
                hours.push(found.clone());
                previous = found;
            }
            None => {
                hours.push(previous.with_timestamp(current));
                synthesized += 1;
            }
        }

        current += one_hour;
    }

    Ok(DensifiedHours { hours, synthesized })
}
