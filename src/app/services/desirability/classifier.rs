//! Parameter and hour desirability classification
//!
//! Each mandatory parameter value maps to a three-level tier through the
//! threshold table. The three tiers are then combined by a veto-then-tier
//! rule: any Low makes the hour Low, and only a unanimous High makes it
//! High. Cloud cover gets a tier of its own but never votes.

use crate::app::models::{HourDesirability, HourRecord, ParamDesirability, Parameter};
use crate::config::{ThresholdBands, ThresholdTable};
use crate::constants::MANDATORY_PARAMETER_COUNT;
use crate::{Error, Result};

/// Classify one parameter value against the table
pub fn classify_parameter(
    parameter: Parameter,
    value: i32,
    thresholds: &ThresholdTable,
) -> ParamDesirability {
    match thresholds.bands(parameter) {
        ThresholdBands::LowerIsBetter([high_below, low_from]) => {
            if value < high_below {
                ParamDesirability::High
            } else if value >= low_from {
                ParamDesirability::Low
            } else {
                ParamDesirability::Medium
            }
        }
        ThresholdBands::MiddleIsBetter([low_below, high_from, high_below, low_from]) => {
            if value < low_below || value >= low_from {
                ParamDesirability::Low
            } else if (high_from..high_below).contains(&value) {
                ParamDesirability::High
            } else {
                ParamDesirability::Medium
            }
        }
    }
}

/// Classify a value for a parameter given by its table key, e.g. `"temp"`
pub fn classify_named_parameter(
    name: &str,
    value: i32,
    thresholds: &ThresholdTable,
) -> Result<ParamDesirability> {
    let parameter: Parameter = name.parse()?;
    Ok(classify_parameter(parameter, value, thresholds))
}

/// Combine the tier counts of the three mandatory parameters
///
/// Counts must be non-negative and sum to exactly three.
pub fn combine_hour(low: i32, medium: i32, high: i32) -> Result<HourDesirability> {
    let in_range = |count: i32| (0..=MANDATORY_PARAMETER_COUNT).contains(&count);
    // Each count is bounded first so the sum cannot overflow
    if ![low, medium, high].into_iter().all(in_range)
        || low + medium + high != MANDATORY_PARAMETER_COUNT
    {
        return Err(Error::invalid_argument(format!(
            "invalid counts: {}, {}, {}",
            low, medium, high
        )));
    }

    Ok(priority_ladder(low, high))
}

fn priority_ladder(low: i32, high: i32) -> HourDesirability {
    if low > 0 {
        HourDesirability::Low
    } else if high == 3 {
        HourDesirability::High
    } else if high == 2 {
        HourDesirability::MediumHigh
    } else {
        HourDesirability::MediumLow
    }
}

/// Tier of each parameter of one hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ParamTiers {
    pub precip: ParamDesirability,
    pub temp: ParamDesirability,
    pub wind: ParamDesirability,

    /// Informational only, never part of the overall rating
    pub clouds: Option<ParamDesirability>,
}

impl ParamTiers {
    /// Classify every parameter of a record
    ///
    /// Returns `None` when the record lacks a mandatory field, as calendar
    /// padding does.
    pub fn for_record(record: &HourRecord, thresholds: &ThresholdTable) -> Option<Self> {
        let classify = |parameter| {
            record
                .value(parameter)
                .map(|value| classify_parameter(parameter, value, thresholds))
        };

        Some(Self {
            precip: classify(Parameter::Precip)?,
            temp: classify(Parameter::Temp)?,
            wind: classify(Parameter::Wind)?,
            clouds: classify(Parameter::Clouds),
        })
    }

    /// Low, medium and high counts over the mandatory parameters
    pub fn counts(&self) -> (i32, i32, i32) {
        [self.precip, self.temp, self.wind]
            .into_iter()
            .fold((0, 0, 0), |(low, medium, high), tier| match tier {
                ParamDesirability::Low => (low + 1, medium, high),
                ParamDesirability::Medium => (low, medium + 1, high),
                ParamDesirability::High => (low, medium, high + 1),
            })
    }

    /// Overall rating from the mandatory parameters
    pub fn overall(&self) -> HourDesirability {
        let (low, _, high) = self.counts();
        priority_ladder(low, high)
    }
}

/// Overall desirability of a record, or `None` for an incomplete record
pub fn hour_desirability(
    record: &HourRecord,
    thresholds: &ThresholdTable,
) -> Option<HourDesirability> {
    ParamTiers::for_record(record, thresholds).map(|tiers| tiers.overall())
}
