//! Test utilities for calendar projection testing

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::app::models::HourRecord;


/// `count` consecutive complete hours from `start`; temperature counts up
/// from zero so each record's position is recoverable
pub fn hours_from(start: &str, count: usize) -> Vec<HourRecord> {
    let start = DateTime::parse_from_rfc3339(start).unwrap();
    (0..count)
        .map(|k| HourRecord::new(start + TimeDelta::hours(k as i64), 0, k as i32, 3, None))
        .collect()
}

/// Same instant, expressed in another offset
pub fn in_offset(record: &HourRecord, offset_hours: i32) -> HourRecord {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    record.with_timestamp(record.timestamp.with_timezone(&offset))
}
