//! Desirability classification for forecast hours
//!
//! Rates each hour from its parameter values and a threshold table, and
//! picks the warning icons a display collaborator may draw. Nothing here
//! carries presentation detail; colors and glyphs are keyed by the tier
//! enumerations alone.
//!
//! - [`classifier`] - Per-parameter tiers and the overall hour rating
//! - [`icons`] - Weather, temperature and wind icon selection

pub mod classifier;
pub mod icons;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::{
    ParamTiers, classify_named_parameter, classify_parameter, combine_hour, hour_desirability,
};
pub use icons::{IconSelection, TemperatureIcon, WeatherIcon, WindIcon, select_icons};
