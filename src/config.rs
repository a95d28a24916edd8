//! Configuration management and validation.
//!
//! Provides the threshold table used to classify parameter values and the
//! pipeline configuration that carries it. A threshold table is validated
//! when it is built, before any document is processed, so a bad table can
//! never silently skew the results for a good document.

use crate::app::models::Parameter;
use crate::constants::{
    DEFAULT_CLOUDS_THRESHOLDS, DEFAULT_PRECIP_THRESHOLDS, DEFAULT_TEMP_THRESHOLDS,
    DEFAULT_WIND_THRESHOLDS, threshold_keys,
};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Threshold bands for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdBands {
    /// `[t_hi, t_lo]`: High below `t_hi`, Low from `t_lo`, Medium between
    LowerIsBetter([i32; 2]),
    /// `[a, b, c, d]`: High in `[b, c)`, Low below `a` or from `d`, Medium otherwise
    MiddleIsBetter([i32; 4]),
}

/// Validated per-parameter cut points ("rangeDict")
///
/// Precipitation, wind and cloud cover use two ascending cut points where
/// lower values are better (High → Medium → Low). Temperature uses four
/// ascending cut points where the middle band is best
/// (Low → Medium → High → Medium → Low).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdTable {
    precip: [i32; 2],
    temp: [i32; 4],
    wind: [i32; 2],
    clouds: [i32; 2],
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            precip: DEFAULT_PRECIP_THRESHOLDS,
            temp: DEFAULT_TEMP_THRESHOLDS,
            wind: DEFAULT_WIND_THRESHOLDS,
            clouds: DEFAULT_CLOUDS_THRESHOLDS,
        }
    }
}

impl ThresholdTable {
    /// Create a table from explicit cut points
    pub fn new(precip: [i32; 2], temp: [i32; 4], wind: [i32; 2], clouds: [i32; 2]) -> Result<Self> {
        let table = Self {
            precip,
            temp,
            wind,
            clouds,
        };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from a JSON rangeDict such as
    /// `{"precip": [10, 30], "temp": [35, 59, 89, 100], "wind": [8, 12], "clouds": [33, 66]}`
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::configuration("rangeDict is not a dict"))?;

        for key in threshold_keys::ALL {
            if !map.contains_key(*key) {
                return Err(Error::configuration(format!(
                    "rangeDict is missing a parameter key: {}",
                    key
                )));
            }
        }
        if let Some(unknown) = map.keys().find(|k| !threshold_keys::ALL.contains(&k.as_str())) {
            return Err(Error::configuration(format!(
                "rangeDict has an unrecognized parameter key: {}",
                unknown
            )));
        }

        let mut lists = Vec::with_capacity(threshold_keys::ALL.len());
        for key in threshold_keys::ALL {
            let list = map[*key]
                .as_array()
                .ok_or_else(|| Error::configuration("rangeDict values were not all lists"))?;
            lists.push((*key, list));
        }

        let mut parsed = Vec::with_capacity(lists.len());
        for (key, list) in lists {
            let ints: Option<Vec<i32>> = list
                .iter()
                .map(|v| v.as_i64().and_then(|n| i32::try_from(n).ok()))
                .collect();
            match ints {
                Some(ints) if !ints.is_empty() => parsed.push((key, ints)),
                _ => {
                    return Err(Error::configuration(
                        "rangeDict values were not all lists of ints",
                    ));
                }
            }
        }

        let mut table = Self::default();
        for (key, ints) in &parsed {
            match *key {
                threshold_keys::TEMP => {
                    table.temp = ints.as_slice().try_into().map_err(|_| {
                        Error::configuration("rangeDict temp is not a list of four ints")
                    })?;
                }
                _ => {
                    let pair: [i32; 2] = ints.as_slice().try_into().map_err(|_| {
                        Error::configuration(
                            "rangeDict precip, wind, or clouds is not a list of two ints",
                        )
                    })?;
                    match *key {
                        threshold_keys::PRECIP => table.precip = pair,
                        threshold_keys::WIND => table.wind = pair,
                        _ => table.clouds = pair,
                    }
                }
            }
        }

        table.validate()?;
        debug!("Threshold table accepted: {:?}", table);
        Ok(table)
    }

    /// Parse and validate a JSON rangeDict
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            Error::configuration(format!("rangeDict is not valid JSON: {}", e))
        })?;
        Self::from_value(&value)
    }

    /// Load and validate a JSON rangeDict from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read threshold table {}", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&contents)
    }

    /// Check that every list is non-decreasing
    pub fn validate(&self) -> Result<()> {
        let sorted = self.precip.is_sorted()
            && self.temp.is_sorted()
            && self.wind.is_sorted()
            && self.clouds.is_sorted();
        if !sorted {
            return Err(Error::configuration("rangeDict values were not all sorted"));
        }
        Ok(())
    }

    /// Get the bands used to classify a parameter
    pub fn bands(&self, parameter: Parameter) -> ThresholdBands {
        match parameter {
            Parameter::Precip => ThresholdBands::LowerIsBetter(self.precip),
            Parameter::Temp => ThresholdBands::MiddleIsBetter(self.temp),
            Parameter::Wind => ThresholdBands::LowerIsBetter(self.wind),
            Parameter::Clouds => ThresholdBands::LowerIsBetter(self.clouds),
        }
    }

    /// Render the table back into its JSON rangeDict form
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            (threshold_keys::PRECIP): self.precip,
            (threshold_keys::TEMP): self.temp,
            (threshold_keys::WIND): self.wind,
            (threshold_keys::CLOUDS): self.clouds,
        })
    }
}

/// Configuration for one pipeline instance
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Cut points used to classify each hour
    pub thresholds: ThresholdTable,

    /// Carry cloud cover samples through alignment and densification
    pub keep_cloud_cover: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdTable::default(),
            keep_cloud_cover: true,
        }
    }
}

impl PipelineConfig {
    /// Use a custom threshold table
    pub fn with_thresholds(mut self, thresholds: ThresholdTable) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Drop cloud cover samples during alignment
    pub fn without_cloud_cover(mut self) -> Self {
        self.keep_cloud_cover = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_error_message(value: Value) -> String {
        match ThresholdTable::from_value(&value) {
            Err(Error::Configuration { message }) => message,
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_table() {
        let table = ThresholdTable::default();
        assert_eq!(table.bands(Parameter::Precip), ThresholdBands::LowerIsBetter([10, 30]));
        assert_eq!(
            table.bands(Parameter::Temp),
            ThresholdBands::MiddleIsBetter([35, 59, 89, 100])
        );
        assert_eq!(table.bands(Parameter::Wind), ThresholdBands::LowerIsBetter([8, 12]));
        assert_eq!(table.bands(Parameter::Clouds), ThresholdBands::LowerIsBetter([33, 66]));
    }

    #[test]
    fn test_from_value_accepts_valid_table() {
        let value = json!({"precip": [0, 1], "temp": [2, 3, 4, 5], "wind": [6, 7], "clouds": [8, 9]});
        let table = ThresholdTable::from_value(&value).unwrap();
        assert_eq!(table.bands(Parameter::Precip), ThresholdBands::LowerIsBetter([0, 1]));
        assert_eq!(table.bands(Parameter::Temp), ThresholdBands::MiddleIsBetter([2, 3, 4, 5]));
        assert_eq!(table.bands(Parameter::Clouds), ThresholdBands::LowerIsBetter([8, 9]));
        assert_eq!(table.to_value(), value);
    }

    #[test]
    fn test_from_value_accepts_equal_cut_points() {
        let value = json!({"precip": [5, 5], "temp": [1, 1, 1, 1], "wind": [6, 7], "clouds": [8, 9]});
        assert!(ThresholdTable::from_value(&value).is_ok());
    }

    #[test]
    fn test_from_value_rejections() {
        let cases = vec![
            (json!(1), "rangeDict is not a dict"),
            (
                json!({"precip": null, "temp": null, "clouds": null}),
                "rangeDict is missing a parameter key",
            ),
            (
                json!({"precip": [1, 2], "temp": [4, 5, 6, 7], "wind": [8, 9], "clouds": [10, 11], "snow": [1, 2]}),
                "rangeDict has an unrecognized parameter key",
            ),
            (
                json!({"precip": null, "temp": null, "wind": null, "clouds": null}),
                "rangeDict values were not all lists",
            ),
            (
                json!({"precip": [], "temp": [], "wind": [], "clouds": []}),
                "rangeDict values were not all lists of ints",
            ),
            (
                json!({"precip": [1.5, 2], "temp": [4, 5, 6, 7], "wind": [8, 9], "clouds": [10, 11]}),
                "rangeDict values were not all lists of ints",
            ),
            (
                json!({"precip": [1, 2, 3], "temp": [4, 5, 6, 7], "wind": [8, 9], "clouds": [10, 11]}),
                "rangeDict precip, wind, or clouds is not a list of two ints",
            ),
            (
                json!({"precip": [1, 2], "temp": [4, 5, 6], "wind": [8, 9], "clouds": [10, 11]}),
                "rangeDict temp is not a list of four ints",
            ),
            (
                json!({"precip": [1, 2], "temp": [4, 5, 6, 7], "wind": [8], "clouds": [10, 11]}),
                "rangeDict precip, wind, or clouds is not a list of two ints",
            ),
            (
                json!({"precip": [1, 2], "temp": [4, 5, 6, 7], "wind": [8, 9], "clouds": [10]}),
                "rangeDict precip, wind, or clouds is not a list of two ints",
            ),
            (
                json!({"precip": [2, 1], "temp": [4, 5, 6, 7], "wind": [8, 9], "clouds": [10, 11]}),
                "rangeDict values were not all sorted",
            ),
            (
                json!({"precip": [1, 2], "temp": [4, 5, 7, 6], "wind": [8, 9], "clouds": [10, 11]}),
                "rangeDict values were not all sorted",
            ),
        ];

        for (value, expected) in cases {
            let message = config_error_message(value.clone());
            assert!(
                message.starts_with(expected),
                "table {} gave '{}', expected '{}'",
                value,
                message,
                expected
            );
        }
    }

    #[test]
    fn test_new_rejects_unsorted() {
        assert!(ThresholdTable::new([10, 30], [35, 59, 89, 100], [8, 12], [33, 66]).is_ok());
        assert!(matches!(
            ThresholdTable::new([30, 10], [35, 59, 89, 100], [8, 12], [33, 66]),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            ThresholdTable::from_json_str("{not json"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_pipeline_config_builder() {
        let table = ThresholdTable::new([0, 1], [2, 3, 4, 5], [6, 7], [8, 9]).unwrap();
        let config = PipelineConfig::default()
            .with_thresholds(table.clone())
            .without_cloud_cover();
        assert_eq!(config.thresholds, table);
        assert!(!config.keep_cloud_cover);
        assert!(PipelineConfig::default().keep_cloud_cover);
    }
}
