//! Hour builder for canonical hourly sequences
//!
//! Turns extracted samples into a gap-free sequence with one complete
//! record per hour.
//!
//! ## Architecture
//!
//! - [`alignment`] - Union timestamp grid and exact-instant sample placement
//! - [`densify`] - Forward fill, incomplete-record trim and hourly densification
//!
//! ## Stages
//!
//! 1. Build one empty record per distinct start time across all layouts
//! 2. Write each sample into the record at its instant
//! 3. Carry the last seen value of each field forward
//! 4. Drop records still missing precipitation, temperature or wind
//! 5. Walk hour by hour from first to last, copying the previous hour into gaps

pub mod alignment;
pub mod densify;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use alignment::{align_samples, build_union_grid, place_samples};
pub use densify::{CarryState, DensifiedHours, densify_hourly, forward_fill, trim_incomplete};

use crate::Result;
use crate::app::models::HourRecord;
use crate::app::services::dwml_parser::ExtractedSamples;
use tracing::debug;

/// Canonical hourly sequence plus the counts gathered while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlySequence {
    pub hours: Vec<HourRecord>,
    pub stats: BuildStats,
}

/// Counts gathered while building an hourly sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BuildStats {
    /// Distinct timestamps across all time layouts
    pub union_grid_size: usize,

    /// Leading records dropped because they never became complete
    pub leading_trimmed: usize,

    /// Complete records before densification
    pub gapped_len: usize,

    /// Hours copied from the previous hour
    pub synthesized: usize,
}

/// Run alignment, forward fill, trim and densification
pub fn build_hourly_sequence(
    extracted: &ExtractedSamples,
    keep_cloud_cover: bool,
) -> Result<HourlySequence> {
    let mut records = align_samples(extracted, keep_cloud_cover);
    let union_grid_size = records.len();

    forward_fill(&mut records);
    let leading_trimmed = trim_incomplete(&mut records);
    if leading_trimmed > 0 {
        debug!("Dropped {} leading incomplete records", leading_trimmed);
    }

    let densified = densify_hourly(&records)?;
    debug!(
        "Densified {} complete records into {} hours ({} synthesized)",
        records.len(),
        densified.hours.len(),
        densified.synthesized
    );

    Ok(HourlySequence {
        stats: BuildStats {
            union_grid_size,
            leading_trimmed,
            gapped_len: records.len(),
            synthesized: densified.synthesized,
        },
        hours: densified.hours,
    })
}
