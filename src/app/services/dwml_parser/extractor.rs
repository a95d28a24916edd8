//! Sample extraction from DWML documents
//!
//! Turns a parsed document into its time layouts (layout key → ordered
//! start-valid-times) and its parameter series (parameter → layout key and
//! ordered values). A document whose root is an error marker short-circuits
//! with a data source error carrying the upstream diagnostic verbatim.

use super::document::Element;
use super::timestamps::parse_start_valid_time;
use crate::app::models::Parameter;
use crate::constants::{
    ERROR_DIAGNOSTIC_TAG, ERROR_ROOT_TAG, LAYOUT_KEY_TAG, NIL_ATTRIBUTE, PARAMETERS_PATH,
    START_VALID_TIME_TAG, TIME_LAYOUT_ATTRIBUTE, TIME_LAYOUT_PATH, VALUE_TAG,
};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// An identifier plus its ordered list of sample timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLayout {
    pub key: String,
    pub start_times: Vec<DateTime<FixedOffset>>,
}

/// Time layouts by layout key
pub type TimeLayoutMap = BTreeMap<String, TimeLayout>;

/// Values reported for one parameter, positionally paired with the start
/// times of the layout named by `layout_key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSeries {
    pub parameter: Parameter,
    pub layout_key: String,

    /// `None` marks a sample the source reported as nil
    pub values: Vec<Option<i32>>,
}

/// Parameter series by parameter
pub type ParameterSeriesMap = BTreeMap<Parameter, ParameterSeries>;

/// One reported value at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSample {
    pub parameter: Parameter,
    pub timestamp: DateTime<FixedOffset>,
    pub value: i32,
}

/// Everything the aligner needs from a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSamples {
    pub time_layouts: TimeLayoutMap,
    pub parameters: ParameterSeriesMap,
}

impl ExtractedSamples {
    /// Every non-nil sample, paired with its timestamp
    ///
    /// Series lengths were checked against their layouts during extraction,
    /// so each value has exactly one timestamp.
    pub fn samples(&self) -> impl Iterator<Item = ParameterSample> + '_ {
        self.parameters.values().flat_map(move |series| {
            let start_times = self
                .time_layouts
                .get(&series.layout_key)
                .map(|layout| layout.start_times.as_slice())
                .unwrap_or_default();

            series
                .values
                .iter()
                .zip(start_times)
                .filter_map(move |(value, timestamp)| {
                    value.map(|value| ParameterSample {
                        parameter: series.parameter,
                        timestamp: *timestamp,
                        value,
                    })
                })
        })
    }

    /// Every start time across every layout, duplicates included
    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<FixedOffset>> + '_ {
        self.time_layouts
            .values()
            .flat_map(|layout| layout.start_times.iter().copied())
    }

    /// Number of non-nil samples
    pub fn sample_count(&self) -> usize {
        self.samples().count()
    }
}

/// Extract time layouts and parameter series from a document root
pub fn extract_samples(root: &Element) -> Result<ExtractedSamples> {
    if root.name == ERROR_ROOT_TAG {
        return Err(Error::data_source(error_diagnostic(root)));
    }

    let time_layouts = extract_time_layouts(root)?;
    let parameters = extract_parameters(root, &time_layouts)?;

    let extracted = ExtractedSamples {
        time_layouts,
        parameters,
    };
    debug!(
        "Extracted {} time layouts, {} parameters, {} samples",
        extracted.time_layouts.len(),
        extracted.parameters.len(),
        extracted.sample_count()
    );
    Ok(extracted)
}

/// Diagnostic text of an error document
///
/// Taken from the `pre` child when there is one, else from the root itself.
/// Each text piece is trimmed and the pieces are joined with newlines, so
/// the words are kept verbatim but outer whitespace and inline layout
/// inside `pre` are not.
pub fn error_diagnostic(root: &Element) -> String {
    root.find(ERROR_DIAGNOSTIC_TAG)
        .unwrap_or(root)
        .text_content()
}

/// Parse every `data/time-layout` block
pub fn extract_time_layouts(root: &Element) -> Result<TimeLayoutMap> {
    let mut layouts = TimeLayoutMap::new();

    for block in root.find_all(TIME_LAYOUT_PATH) {
        let key = block
            .find(LAYOUT_KEY_TAG)
            .map(|element| element.text().trim())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::document_format("time layout without a layout-key"))?;

        let start_times = block
            .find_all(START_VALID_TIME_TAG)
            .into_iter()
            .map(|element| parse_start_valid_time(element.text()))
            .collect::<Result<Vec<_>>>()?;

        debug!("Time layout {}: {} start times", key, start_times.len());
        let layout = TimeLayout {
            key: key.to_string(),
            start_times,
        };
        if layouts.insert(key.to_string(), layout).is_some() {
            warn!("Time layout {} appears more than once, keeping the last", key);
        }
    }

    Ok(layouts)
}

/// Parse every parameter under each `data/parameters` block and pair it with
/// its layout
pub fn extract_parameters(root: &Element, layouts: &TimeLayoutMap) -> Result<ParameterSeriesMap> {
    let mut series_map = ParameterSeriesMap::new();

    for block in root.find_all(PARAMETERS_PATH) {
        for element in &block.children {
            let series = parse_series(element, layouts)?;
            let parameter = series.parameter;
            if series_map.insert(parameter, series).is_some() {
                warn!(
                    "Parameter <{}> appears more than once, keeping the last",
                    element.name
                );
            }
        }
    }

    Ok(series_map)
}

fn parse_series(element: &Element, layouts: &TimeLayoutMap) -> Result<ParameterSeries> {
    let parameter = Parameter::from_dwml_tag(&element.name)?;

    let layout_key = element.attribute(TIME_LAYOUT_ATTRIBUTE).ok_or_else(|| {
        Error::document_format(format!(
            "parameter <{}> has no {} attribute",
            element.name, TIME_LAYOUT_ATTRIBUTE
        ))
    })?;
    let layout = layouts.get(layout_key).ok_or_else(|| {
        Error::document_format(format!(
            "parameter <{}> refers to unknown time layout '{}'",
            element.name, layout_key
        ))
    })?;

    let values = element
        .find_all(VALUE_TAG)
        .into_iter()
        .map(parse_value)
        .collect::<Result<Vec<_>>>()?;

    if values.len() != layout.start_times.len() {
        return Err(Error::document_format(format!(
            "parameter <{}> has {} values but time layout '{}' has {} start times",
            element.name,
            values.len(),
            layout_key,
            layout.start_times.len()
        )));
    }

    Ok(ParameterSeries {
        parameter,
        layout_key: layout_key.to_string(),
        values,
    })
}

fn parse_value(element: &Element) -> Result<Option<i32>> {
    if element.attribute(NIL_ATTRIBUTE) == Some("true") {
        return Ok(None);
    }

    let text = element.text().trim();
    text.parse::<i32>().map(Some).map_err(|e| {
        Error::document_format_with_source(format!("invalid sample value '{}'", text), e)
    })
}
