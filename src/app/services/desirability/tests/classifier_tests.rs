//! Tests for parameter classification and hour combination

use super::super::classifier::{
    ParamTiers, classify_named_parameter, classify_parameter, combine_hour, hour_desirability,
};
use super::{all_partitions, hour};
use crate::Error;
use crate::app::models::HourDesirability as H;
use crate::app::models::ParamDesirability::{High, Low, Medium};
use crate::app::models::{HourRecord, Parameter};
use crate::config::ThresholdTable;

#[test]
fn test_parameter_boundaries_with_default_table() {
    let table = ThresholdTable::default();
    let expected = vec![
        (
            Parameter::Precip,
            vec![(0, High), (9, High), (10, Medium), (29, Medium), (30, Low), (100, Low)],
        ),
        (
            Parameter::Temp,
            vec![
                (-100, Low),
                (34, Low),
                (35, Medium),
                (58, Medium),
                (59, High),
                (88, High),
                (89, Medium),
                (99, Medium),
                (100, Low),
                (101, Low),
            ],
        ),
        (
            Parameter::Wind,
            vec![(0, High), (7, High), (8, Medium), (11, Medium), (12, Low), (100, Low)],
        ),
        (
            Parameter::Clouds,
            vec![(0, High), (32, High), (33, Medium), (65, Medium), (66, Low), (100, Low)],
        ),
    ];

    for (parameter, cases) in expected {
        for (value, tier) in cases {
            assert_eq!(
                classify_parameter(parameter, value, &table),
                tier,
                "{} = {}",
                parameter,
                value
            );
        }
    }
}

#[test]
fn test_custom_table_is_used() {
    let table = ThresholdTable::new([50, 60], [0, 10, 20, 30], [1, 2], [33, 66]).unwrap();
    assert_eq!(classify_parameter(Parameter::Precip, 40, &table), High);
    assert_eq!(classify_parameter(Parameter::Temp, 15, &table), High);
    assert_eq!(classify_parameter(Parameter::Temp, 25, &table), Medium);
    assert_eq!(classify_parameter(Parameter::Wind, 2, &table), Low);
}

#[test]
fn test_collapsed_bands() {
    let table = ThresholdTable::new([10, 10], [40, 40, 40, 40], [8, 12], [33, 66]).unwrap();
    assert_eq!(classify_parameter(Parameter::Precip, 9, &table), High);
    assert_eq!(classify_parameter(Parameter::Precip, 10, &table), Low);
    assert_eq!(classify_parameter(Parameter::Temp, 39, &table), Low);
    assert_eq!(classify_parameter(Parameter::Temp, 40, &table), Low);
}

#[test]
fn test_named_parameter() {
    let table = ThresholdTable::default();
    assert_eq!(classify_named_parameter("wind", 9, &table).unwrap(), Medium);
    assert!(matches!(
        classify_named_parameter("humidity", 9, &table),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_combine_hour_is_total_over_partitions() {
    let expected = [
        ((0, 0, 3), H::High),
        ((0, 1, 2), H::MediumHigh),
        ((0, 2, 1), H::MediumLow),
        ((0, 3, 0), H::MediumLow),
        ((1, 0, 2), H::Low),
        ((1, 1, 1), H::Low),
        ((1, 2, 0), H::Low),
        ((2, 0, 1), H::Low),
        ((2, 1, 0), H::Low),
        ((3, 0, 0), H::Low),
    ];

    let mut partitions = all_partitions();
    partitions.sort();
    let mut listed: Vec<_> = expected.iter().map(|(counts, _)| *counts).collect();
    listed.sort();
    assert_eq!(partitions, listed);

    for ((low, medium, high), tier) in expected {
        assert_eq!(
            combine_hour(low, medium, high).unwrap(),
            tier,
            "({}, {}, {})",
            low,
            medium,
            high
        );
    }
}

#[test]
fn test_combine_hour_examples() {
    assert_eq!(combine_hour(3, 0, 0).unwrap(), H::Low);
    assert_eq!(combine_hour(1, 1, 1).unwrap(), H::Low);
    assert_eq!(combine_hour(1, 0, 2).unwrap(), H::Low);
    assert_eq!(combine_hour(0, 0, 3).unwrap(), H::High);
    assert_eq!(combine_hour(0, 1, 2).unwrap(), H::MediumHigh);
    assert_eq!(combine_hour(0, 2, 1).unwrap(), H::MediumLow);
    assert_eq!(combine_hour(0, 3, 0).unwrap(), H::MediumLow);
}

#[test]
fn test_combine_hour_rejects_bad_counts() {
    let bad_counts = [
        (0, 0, 0),
        (1, 1, 0),
        (2, 2, 0),
        (0, 0, 4),
        (-1, 2, 2),
        (4, -1, 0),
        (i32::MAX, 1, 2),
        (i32::MAX, i32::MAX, 5),
        (i32::MIN, i32::MIN, 3),
    ];
    for (low, medium, high) in bad_counts {
        let error = combine_hour(low, medium, high).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument { .. }));
        assert!(error.to_string().contains("invalid counts"));
    }
}

#[test]
fn test_hour_desirability_examples() {
    let table = ThresholdTable::default();
    assert_eq!(hour_desirability(&hour(100, 65, 0, None), &table), Some(H::Low));
    assert_eq!(hour_desirability(&hour(20, 40, 0, None), &table), Some(H::MediumLow));
    assert_eq!(hour_desirability(&hour(20, 65, 0, None), &table), Some(H::MediumHigh));
    assert_eq!(hour_desirability(&hour(0, 65, 0, None), &table), Some(H::High));
    assert_eq!(hour_desirability(&hour(10, 60, 6, None), &table), Some(H::MediumHigh));
}

#[test]
fn test_cloud_cover_never_votes() {
    let table = ThresholdTable::default();
    let clear = hour(0, 65, 0, Some(0));
    let overcast = hour(0, 65, 0, Some(100));

    assert_eq!(hour_desirability(&clear, &table), Some(H::High));
    assert_eq!(hour_desirability(&overcast, &table), Some(H::High));

    let tiers = ParamTiers::for_record(&overcast, &table).unwrap();
    assert_eq!(tiers.clouds, Some(Low));
    assert_eq!(tiers.counts(), (0, 0, 3));
}

#[test]
fn test_incomplete_record_has_no_rating() {
    let table = ThresholdTable::default();
    let mut record = hour(0, 65, 0, None);
    record.wind = None;
    assert_eq!(hour_desirability(&record, &table), None);

    let padding = HourRecord::empty(record.timestamp);
    assert!(ParamTiers::for_record(&padding, &table).is_none());
}
