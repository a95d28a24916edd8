//! Forecast Calendar Library
//!
//! A Rust library for turning irregularly-sampled NDFD weather forecasts
//! (DWML documents) into a gap-free hourly sequence and a day-by-hour calendar.
//!
//! This library provides tools for:
//! - Extracting time layouts and parameter samples from DWML documents
//! - Aligning samples from independently-sampled parameters onto one timeline
//! - Forward-filling and densifying the timeline to exactly one record per hour
//! - Classifying each hour's desirability from a configurable threshold table
//! - Projecting the hours onto a 24-row calendar grid, correcting for
//!   mid-stream UTC offset changes in the source data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod calendar;
        pub mod desirability;
        pub mod dwml_parser;
        pub mod hour_builder;
        pub mod pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HourDesirability, HourRecord, ParamDesirability, Parameter};
pub use app::services::calendar::CalendarGrid;
pub use app::services::pipeline::{Forecast, ForecastPipeline, PipelineStats};
pub use config::{PipelineConfig, ThresholdTable};

/// Result type alias for the forecast calendar pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for forecast processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The document is malformed: bad timestamp text, mismatched sample
    /// counts, unknown parameter tags or invalid XML
    #[error("Document format error: {message}")]
    DocumentFormat {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The upstream service answered with an error document instead of data
    #[error("Data source error: {diagnostic}")]
    DataSource { diagnostic: String },

    /// No hour ever acquired precipitation, temperature and wind together
    #[error("No usable forecast data: {message}")]
    InsufficientData { message: String },

    /// Threshold table validation failed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A function was called with arguments outside its contract
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a document format error
    pub fn document_format(message: impl Into<String>) -> Self {
        Self::DocumentFormat {
            message: message.into(),
            source: None,
        }
    }

    /// Create a document format error that wraps the underlying parse failure
    pub fn document_format_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DocumentFormat {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a data source error carrying the upstream diagnostic verbatim
    pub fn data_source(diagnostic: impl Into<String>) -> Self {
        Self::DataSource {
            diagnostic: diagnostic.into(),
        }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::InsufficientData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether the error means "there is no forecast to show"
    ///
    /// An error document from the source and a document in which no hour
    /// ever became complete are handled identically by callers.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataSource { .. } | Self::InsufficientData { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::document_format_with_source("XML parsing failed", error)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::document_format_with_source("Date/time parsing failed", error)
    }
}
