//! Test utilities for hour builder testing

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::app::models::HourRecord;

mod sequence_tests;

/// 2015-01-13 00:00 US Eastern plus `hours`
pub fn eastern(hours: i64) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2015-01-13T00:00:00-05:00").unwrap() + TimeDelta::hours(hours)
}

/// Record with every mandatory field set
pub fn complete(hours: i64, precip: i32, temp: i32, wind: i32) -> HourRecord {
    HourRecord::new(eastern(hours), precip, temp, wind, None)
}

/// Record with only the given fields set
pub fn partial(
    hours: i64,
    precip: Option<i32>,
    temp: Option<i32>,
    wind: Option<i32>,
    clouds: Option<i32>,
) -> HourRecord {
    HourRecord {
        timestamp: eastern(hours),
        precip,
        temp,
        wind,
        clouds,
    }
}

/// Assert one record per hour, strictly increasing, every field present
pub fn assert_canonical(hours: &[HourRecord]) {
    for pair in hours.windows(2) {
        assert_eq!(
            pair[1].timestamp - pair[0].timestamp,
            TimeDelta::hours(1),
            "gap between {} and {}",
            pair[0],
            pair[1]
        );
    }
    assert!(hours.iter().all(HourRecord::is_complete));
}
