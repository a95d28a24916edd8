//! Forecast pipeline orchestration
//!
//! Runs a DWML document through extraction, alignment, densification and
//! hands back a [`Forecast`]: the canonical hourly sequence plus the table
//! needed to classify, decorate and project it on demand.
//!
//! Each run is independent. A pipeline holds only its configuration, so one
//! instance may serve concurrent callers.

use crate::app::models::{HourDesirability, HourRecord};
use crate::app::services::calendar::{CalendarGrid, header_row};
use crate::app::services::desirability::{
    IconSelection, ParamTiers, hour_desirability, select_icons,
};
use crate::app::services::dwml_parser::{Element, extract_samples};
use crate::app::services::hour_builder::build_hourly_sequence;
use crate::config::{PipelineConfig, ThresholdTable};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeDelta, Timelike, Weekday};
use serde::Serialize;
use tracing::info;

/// Counts gathered during one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Time layouts found in the document
    pub layouts: usize,

    /// Non-nil parameter samples found in the document
    pub samples: usize,

    /// Distinct timestamps across all time layouts
    pub union_grid_size: usize,

    /// Leading records dropped because they never became complete
    pub leading_trimmed: usize,

    /// Complete records before densification
    pub gapped_len: usize,

    /// Hours copied from the previous hour during densification
    pub synthesized_hours: usize,

    /// Hours in the canonical sequence
    pub final_hours: usize,
}

impl PipelineStats {
    /// Get a one-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} samples in {} layouts -> {} timestamps, {} trimmed, {} complete, {} synthesized, {} hours",
            self.samples,
            self.layouts,
            self.union_grid_size,
            self.leading_trimmed,
            self.gapped_len,
            self.synthesized_hours,
            self.final_hours
        )
    }
}

/// Forecast pipeline for one threshold table and configuration
#[derive(Debug, Clone, Default)]
pub struct ForecastPipeline {
    config: PipelineConfig,
}

impl ForecastPipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run a parsed document through the pipeline
    ///
    /// # Errors
    ///
    /// * `DataSource` when the document is an error report
    /// * `DocumentFormat` for malformed timestamps, values or layouts
    /// * `InsufficientData` when no hour has all mandatory parameters
    pub fn run(&self, root: &Element) -> Result<Forecast> {
        let extracted = extract_samples(root)?;
        let sequence = build_hourly_sequence(&extracted, self.config.keep_cloud_cover)?;

        let stats = PipelineStats {
            layouts: extracted.time_layouts.len(),
            samples: extracted.sample_count(),
            union_grid_size: sequence.stats.union_grid_size,
            leading_trimmed: sequence.stats.leading_trimmed,
            gapped_len: sequence.stats.gapped_len,
            synthesized_hours: sequence.stats.synthesized,
            final_hours: sequence.hours.len(),
        };
        info!("Forecast built: {}", stats.summary());

        Ok(Forecast {
            hours: sequence.hours,
            thresholds: self.config.thresholds.clone(),
            stats,
        })
    }

    /// Parse an XML document and run it through the pipeline
    pub fn run_str(&self, xml: &str) -> Result<Forecast> {
        let root = Element::parse_str(xml)?;
        self.run(&root)
    }
}

/// Canonical hourly forecast with the table used to rate it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    hours: Vec<HourRecord>,
    thresholds: ThresholdTable,
    stats: PipelineStats,
}

impl Forecast {
    /// One complete record per hour, strictly increasing, never empty
    pub fn hours(&self) -> &[HourRecord] {
        &self.hours
    }

    /// Table used for classification
    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Counts gathered while building the forecast
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Project the hours onto a 24-row calendar
    pub fn calendar(&self) -> Result<CalendarGrid> {
        CalendarGrid::project(&self.hours)
    }

    /// Weekday labels of the calendar columns
    pub fn header_row(&self) -> Result<Vec<&'static str>> {
        header_row(&self.hours)
    }

    /// Overall rating of a record under this forecast's table
    pub fn desirability(&self, record: &HourRecord) -> Option<HourDesirability> {
        hour_desirability(record, &self.thresholds)
    }

    /// Per-parameter tiers of a record under this forecast's table
    pub fn tiers(&self, record: &HourRecord) -> Option<ParamTiers> {
        ParamTiers::for_record(record, &self.thresholds)
    }

    /// Icons for a record under this forecast's table
    pub fn icons(&self, record: &HourRecord) -> Option<IconSelection> {
        select_icons(record, &self.thresholds)
    }

    /// Record at exactly this instant
    pub fn find_hour(&self, timestamp: DateTime<FixedOffset>) -> Option<&HourRecord> {
        self.hours
            .binary_search_by_key(&timestamp, |hour| hour.timestamp)
            .ok()
            .map(|index| &self.hours[index])
    }

    /// First record on a weekday at an hour of day, in each record's own
    /// offset
    ///
    /// When no record matches, returns an empty placeholder dated on the
    /// first such weekday on or after the start of the forecast.
    pub fn hour_at(&self, weekday: Weekday, hour_of_day: u32) -> Result<HourRecord> {
        let time = NaiveTime::from_hms_opt(hour_of_day, 0, 0).ok_or_else(|| {
            Error::invalid_argument(format!("hour of day out of range: {}", hour_of_day))
        })?;

        if let Some(found) = self.hours.iter().find(|hour| {
            hour.timestamp.weekday() == weekday && hour.timestamp.hour() == hour_of_day
        }) {
            return Ok(found.clone());
        }

        let first = self
            .hours
            .first()
            .map(|hour| hour.timestamp)
            .ok_or_else(|| Error::insufficient_data("forecast has no hours"))?;
        let days_ahead = (weekday.num_days_from_monday() + 7
            - first.weekday().num_days_from_monday())
            % 7;
        let date = first.date_naive() + TimeDelta::days(days_ahead as i64);
        let timestamp = date
            .and_time(time)
            .and_local_timezone(*first.offset())
            .single()
            .ok_or_else(|| Error::invalid_argument("placeholder time is ambiguous"))?;

        Ok(HourRecord::empty(timestamp))
    }
}
