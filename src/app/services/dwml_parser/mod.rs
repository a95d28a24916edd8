//! DWML parser for NDFD time-series forecasts
//!
//! This module turns a raw DWML document into the per-layout timestamps and
//! per-parameter samples the hour builder aligns.
//!
//! ## Architecture
//!
//! - [`document`] - Owned element tree built from XML text
//! - [`timestamps`] - start-valid-time parsing with offset normalization
//! - [`extractor`] - Time layouts, parameter series and flattened samples
//!
//! ## Usage
//!
//! ```rust
//! use forecast_calendar::app::services::dwml_parser::{Element, extract_samples};
//!
//! # fn example(xml: &str) -> forecast_calendar::Result<()> {
//! let root = Element::parse_str(xml)?;
//! let extracted = extract_samples(&root)?;
//! println!("{} samples in {} layouts", extracted.sample_count(), extracted.time_layouts.len());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod extractor;
pub mod timestamps;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use document::Element;
pub use extractor::{
    ExtractedSamples, ParameterSample, ParameterSeries, ParameterSeriesMap, TimeLayout,
    TimeLayoutMap, extract_samples,
};
pub use timestamps::parse_start_valid_time;
