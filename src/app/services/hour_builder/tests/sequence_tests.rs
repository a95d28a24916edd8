//! Tests for the full alignment-to-densification run

use super::super::build_hourly_sequence;
use super::{assert_canonical, eastern};
use crate::Error;
use crate::app::services::dwml_parser::extract_samples;
use crate::app::services::dwml_parser::tests::{
    create_two_layout_document, dwml_document, parameter_xml, parse, time_layout_xml, values,
};

#[test]
fn test_two_layout_document() {
    let extracted = extract_samples(&parse(&create_two_layout_document())).unwrap();
    let sequence = build_hourly_sequence(&extracted, true).unwrap();
    let hours = &sequence.hours;

    // 06:00 only has precipitation, so the sequence starts at 07:00
    assert_eq!(hours.len(), 12);
    assert_eq!(hours[0].timestamp, eastern(7));
    assert_eq!(hours[11].timestamp, eastern(18));
    assert_canonical(hours);

    assert!(hours[..11].iter().all(|hour| hour.precip == Some(10)));
    assert_eq!(hours[11].precip, Some(40));

    let temps: Vec<_> = hours.iter().map(|hour| hour.temp.unwrap()).collect();
    assert_eq!(temps, vec![50, 50, 50, 55, 55, 55, 60, 60, 60, 65, 65, 65]);
    let winds: Vec<_> = hours.iter().map(|hour| hour.wind.unwrap()).collect();
    assert_eq!(winds, vec![5, 5, 5, 6, 6, 6, 7, 7, 7, 8, 8, 8]);

    assert_eq!(sequence.stats.union_grid_size, 6);
    assert_eq!(sequence.stats.leading_trimmed, 1);
    assert_eq!(sequence.stats.gapped_len, 5);
    assert_eq!(sequence.stats.synthesized, 7);
}

#[test]
fn test_build_is_idempotent() {
    let extracted = extract_samples(&parse(&create_two_layout_document())).unwrap();
    let first = build_hourly_sequence(&extracted, true).unwrap();
    let second = build_hourly_sequence(&extracted, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_mandatory_parameter_is_insufficient_data() {
    let xml = dwml_document(
        &[time_layout_xml(
            "k1",
            &["2015-01-13T07:00:00-05:00", "2015-01-13T10:00:00-05:00"],
        )],
        &[
            parameter_xml("temperature", "k1", &values(&[41, 42])),
            parameter_xml("wind-speed", "k1", &values(&[3, 4])),
        ],
    );
    let extracted = extract_samples(&parse(&xml)).unwrap();

    let error = build_hourly_sequence(&extracted, true).unwrap_err();
    assert!(matches!(error, Error::InsufficientData { .. }));
}

#[test]
fn test_cloud_cover_carried_forward() {
    let xml = dwml_document(
        &[
            time_layout_xml(
                "k1",
                &["2015-01-13T07:00:00-05:00", "2015-01-13T09:00:00-05:00"],
            ),
            time_layout_xml("k2", &["2015-01-13T08:00:00-05:00"]),
        ],
        &[
            parameter_xml("probability-of-precipitation", "k1", &values(&[0, 5])),
            parameter_xml("temperature", "k1", &values(&[41, 42])),
            parameter_xml("wind-speed", "k1", &values(&[3, 4])),
            parameter_xml("cloud-amount", "k2", &values(&[70])),
        ],
    );
    let extracted = extract_samples(&parse(&xml)).unwrap();

    let sequence = build_hourly_sequence(&extracted, true).unwrap();
    let clouds: Vec<_> = sequence.hours.iter().map(|hour| hour.clouds).collect();
    assert_eq!(clouds, vec![None, Some(70), Some(70)]);

    let without = build_hourly_sequence(&extracted, false).unwrap();
    assert!(without.hours.iter().all(|hour| hour.clouds.is_none()));
    assert_eq!(without.hours.len(), 3);
}
