//! Data models for forecast processing
//!
//! This module contains the core data structures shared by every pipeline
//! stage: the weather parameters, the hourly record and the desirability
//! tiers computed from it.

use crate::constants::{HOUR_DISPLAY_FORMAT, parameter_tags, threshold_keys};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Weather Parameters
// =============================================================================

/// A weather parameter carried by an hour
///
/// Precipitation, temperature and wind are mandatory: every record in the
/// canonical hourly sequence carries them. Cloud cover is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Probability of precipitation, 0-100 percent
    Precip,
    /// Temperature, degrees Fahrenheit
    Temp,
    /// Sustained wind speed, miles per hour
    Wind,
    /// Cloud cover, 0-100 percent
    Clouds,
}

impl Parameter {
    /// Parameters that vote in the overall hour rating
    pub const MANDATORY: [Parameter; 3] = [Parameter::Precip, Parameter::Temp, Parameter::Wind];

    /// Key used for this parameter in a threshold table
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Precip => threshold_keys::PRECIP,
            Parameter::Temp => threshold_keys::TEMP,
            Parameter::Wind => threshold_keys::WIND,
            Parameter::Clouds => threshold_keys::CLOUDS,
        }
    }

    /// Map a DWML parameter block tag to its parameter
    pub fn from_dwml_tag(tag: &str) -> Result<Self> {
        match tag {
            parameter_tags::PRECIPITATION => Ok(Parameter::Precip),
            parameter_tags::TEMPERATURE => Ok(Parameter::Temp),
            parameter_tags::WIND_SPEED => Ok(Parameter::Wind),
            parameter_tags::CLOUD_AMOUNT => Ok(Parameter::Clouds),
            other => Err(Error::document_format(format!(
                "unknown parameter tag '{}'",
                other
            ))),
        }
    }

    /// Whether this parameter must be present in every canonical hour
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, Parameter::Clouds)
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            threshold_keys::PRECIP => Ok(Parameter::Precip),
            threshold_keys::TEMP => Ok(Parameter::Temp),
            threshold_keys::WIND => Ok(Parameter::Wind),
            threshold_keys::CLOUDS => Ok(Parameter::Clouds),
            other => Err(Error::invalid_argument(format!(
                "invalid parameter: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Desirability Tiers
// =============================================================================

/// Desirability of a single parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamDesirability {
    Low,
    Medium,
    High,
}

/// Overall desirability of an hour, combined from its mandatory parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HourDesirability {
    Low,
    MediumLow,
    MediumHigh,
    High,
}

impl fmt::Display for ParamDesirability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamDesirability::Low => write!(f, "low"),
            ParamDesirability::Medium => write!(f, "medium"),
            ParamDesirability::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for HourDesirability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourDesirability::Low => write!(f, "low"),
            HourDesirability::MediumLow => write!(f, "medium-low"),
            HourDesirability::MediumHigh => write!(f, "medium-high"),
            HourDesirability::High => write!(f, "high"),
        }
    }
}

// =============================================================================
// Hour Record
// =============================================================================

/// One hour of forecast data
///
/// The timestamp is always on the hour and keeps the UTC offset it was
/// reported with. Equality compares the timestamp instant and every value,
/// so two records describing the same hour with the same data are
/// interchangeable. Chronological ordering is by timestamp only; sort with
/// `sort_by_key(|hour| hour.timestamp)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRecord {
    /// Start of the hour, tagged with its reported UTC offset
    pub timestamp: DateTime<FixedOffset>,

    /// Probability of precipitation, percent
    pub precip: Option<i32>,

    /// Temperature, degrees Fahrenheit
    pub temp: Option<i32>,

    /// Wind speed, miles per hour
    pub wind: Option<i32>,

    /// Cloud cover, percent (absent on some sources)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clouds: Option<i32>,
}

impl HourRecord {
    /// Create a record with all values set
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        precip: i32,
        temp: i32,
        wind: i32,
        clouds: Option<i32>,
    ) -> Self {
        Self {
            timestamp,
            precip: Some(precip),
            temp: Some(temp),
            wind: Some(wind),
            clouds,
        }
    }

    /// Create a record with no values, used both for alignment shells and
    /// for calendar padding
    pub fn empty(timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp,
            precip: None,
            temp: None,
            wind: None,
            clouds: None,
        }
    }

    /// Copy every value of this record onto a different hour
    pub fn with_timestamp(&self, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    /// Get the value stored for a parameter
    pub fn value(&self, parameter: Parameter) -> Option<i32> {
        match parameter {
            Parameter::Precip => self.precip,
            Parameter::Temp => self.temp,
            Parameter::Wind => self.wind,
            Parameter::Clouds => self.clouds,
        }
    }

    /// Set the value for a parameter
    pub fn set_value(&mut self, parameter: Parameter, value: i32) {
        match parameter {
            Parameter::Precip => self.precip = Some(value),
            Parameter::Temp => self.temp = Some(value),
            Parameter::Wind => self.wind = Some(value),
            Parameter::Clouds => self.clouds = Some(value),
        }
    }

    /// Whether precipitation, temperature and wind are all present
    pub fn is_complete(&self) -> bool {
        self.precip.is_some() && self.temp.is_some() && self.wind.is_some()
    }

    /// Whether this is a padding hour that carries no data at all
    pub fn is_placeholder(&self) -> bool {
        self.precip.is_none() && self.temp.is_none() && self.wind.is_none() && self.clouds.is_none()
    }
}

impl fmt::Display for HourRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unknown(value: Option<i32>) -> String {
            value.map_or_else(|| "?".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "{} | {}°F, {} MPH, {}%",
            self.timestamp.format(HOUR_DISPLAY_FORMAT),
            or_unknown(self.temp),
            or_unknown(self.wind),
            or_unknown(self.precip)
        )?;

        if let Some(clouds) = self.clouds {
            write!(f, ", {}% clouds", clouds)?;
        }
        Ok(())
    }
}
