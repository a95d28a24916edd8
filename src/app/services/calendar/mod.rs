//! Calendar projection for hourly forecasts
//!
//! - [`projector`] - Timestamp re-derivation, weekday header and the 24-row grid

pub mod projector;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use projector::{CalendarGrid, as_calendar_rows, header_row, rederive_timestamps};
