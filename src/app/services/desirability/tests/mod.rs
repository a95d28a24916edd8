//! Test utilities for desirability testing

use chrono::DateTime;

use crate::app::models::HourRecord;

// Test modules
mod classifier_tests;

/// Record at a fixed hour with the given values
pub fn hour(precip: i32, temp: i32, wind: i32, clouds: Option<i32>) -> HourRecord {
    HourRecord::new(
        DateTime::parse_from_rfc3339("2015-01-13T19:00:00-05:00").unwrap(),
        precip,
        temp,
        wind,
        clouds,
    )
}

/// Every (low, medium, high) partition of three
pub fn all_partitions() -> Vec<(i32, i32, i32)> {
    let mut partitions = Vec::new();
    for low in 0..=3 {
        for medium in 0..=(3 - low) {
            partitions.push((low, medium, 3 - low - medium));
        }
    }
    partitions
}
