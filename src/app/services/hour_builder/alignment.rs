//! Sample alignment onto the union timestamp grid
//!
//! Every distinct instant referenced by any time layout becomes one empty
//! record; each sample is then written into the record at exactly its
//! instant. Matching is by instant, so the same hour reported under two
//! different offsets lands in one record.

use crate::app::models::{HourRecord, Parameter};
use crate::app::services::dwml_parser::{ExtractedSamples, ParameterSample};
use tracing::{debug, warn};

/// One empty record per distinct start time across all layouts, sorted
pub fn build_union_grid(extracted: &ExtractedSamples) -> Vec<HourRecord> {
    let mut timestamps: Vec<_> = extracted.timestamps().collect();
    timestamps.sort();
    timestamps.dedup();

    timestamps.into_iter().map(HourRecord::empty).collect()
}

/// Write each sample into the grid record at its instant
///
/// The grid must be sorted by timestamp. Cloud cover samples are skipped
/// unless `keep_cloud_cover` is set. Returns the number of samples placed.
pub fn place_samples(
    grid: &mut [HourRecord],
    samples: impl IntoIterator<Item = ParameterSample>,
    keep_cloud_cover: bool,
) -> usize {
    let mut placed = 0;

    for sample in samples {
        if sample.parameter == Parameter::Clouds && !keep_cloud_cover {
            continue;
        }

        match grid.binary_search_by_key(&sample.timestamp, |record| record.timestamp) {
            Ok(index) => {
                grid[index].set_value(sample.parameter, sample.value);
                placed += 1;
            }
            Err(_) => warn!(
                "No grid record at {} for {} sample, skipping",
                sample.timestamp, sample.parameter
            ),
        }
    }

    placed
}

/// Build the union grid and place every sample into it
pub fn align_samples(extracted: &ExtractedSamples, keep_cloud_cover: bool) -> Vec<HourRecord> {
    let mut grid = build_union_grid(extracted);
    let placed = place_samples(&mut grid, extracted.samples(), keep_cloud_cover);
    debug!(
        "Aligned {} samples onto {} distinct timestamps",
        placed,
        grid.len()
    );
    grid
}
