//! End-to-end vectorization pipeline.
//!
//! [`RoadVectorizer`] exposes a simple API: feed a binary mask and get the
//! exported road graph with per-stage timings. Internally it coordinates
//! mask cleanup, two-family thinning, spike removal, the two labeling
//! passes, junction resolution, continuity merging and the final export.
//!
//! Typical usage:
//! ```no_run
//! use road_vectorizer::prelude::*;
//!
//! # fn example(mask: Mask) -> Result<(), String> {
//! let vectorizer = RoadVectorizer::new(VectorizerConfig::default());
//! let report = vectorizer.process(&mask)?;
//! println!("{} roads", report.graph.roads.len());
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline is a pure function of the input mask and configuration:
//! failures are deterministic and reproducible.

use crate::cleaner;
use crate::config::VectorizerConfig;
use crate::corners;
use crate::export::{export_road_graph, RoadGraph};
use crate::labeling;
use crate::merge;
use crate::raster::{LabelRaster, Mask};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Inputs above this pixel count are rejected up front.
const MAX_PIXELS: u64 = 1 << 30;

/// Per-stage wall-clock timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub cleanup_ms: f64,
    pub thinning_ms: f64,
    pub labeling_ms: f64,
    pub corners_ms: f64,
    pub merging_ms: f64,
    pub export_ms: f64,
    pub total_ms: f64,
}

/// Result of a pipeline run: the exported graph plus the intermediate
/// rasters, kept for debug artifacts and inspection.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub graph: RoadGraph,
    pub skeleton: Mask,
    pub labels: LabelRaster,
    pub timing: TimingBreakdown,
}

/// Road vectorizer orchestrating cleanup, thinning, labeling, junction
/// resolution and continuity merging.
pub struct RoadVectorizer {
    config: VectorizerConfig,
}

impl RoadVectorizer {
    /// Create a vectorizer with the supplied parameters.
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline on a binary mask.
    pub fn process(&self, mask: &Mask) -> Result<PipelineReport, String> {
        validate_dimensions(mask)?;
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let stage_start = Instant::now();
        let mut cleaned = mask.clone();
        cleaner::fill_gaps(&mut cleaned, self.config.gap_fill_max_px);
        cleaner::remove_small_blobs(&mut cleaned, self.config.min_blob_px);
        timing.cleanup_ms = elapsed_ms(stage_start);

        let stage_start = Instant::now();
        let mut skeleton = crate::skeleton::skeletonize(&cleaned);
        cleaner::remove_spikes(&mut skeleton, self.config.spike_max_len_px);
        timing.thinning_ms = elapsed_ms(stage_start);
        debug!("skeleton: {} foreground pixels", skeleton.count_fg());

        let stage_start = Instant::now();
        let (_discovery, initial_labels) = labeling::label_initial_segments(&skeleton);
        let assigned = labeling::assign_junction_pixels(&skeleton, &initial_labels);
        let (mut table, mut labels) = labeling::rebuild_ordered(&assigned);
        timing.labeling_ms = elapsed_ms(stage_start);
        debug!("labeling: {} ordered segments", table.len());

        let stage_start = Instant::now();
        let corner_points = corners::find_corners(&skeleton);
        timing.corners_ms = elapsed_ms(stage_start);

        let stage_start = Instant::now();
        merge::merge_continuous_roads(
            &corner_points,
            &mut table,
            &mut labels,
            &self.config.merge_options(),
        );
        timing.merging_ms = elapsed_ms(stage_start);
        debug!("merging: {} roads remain", table.len());

        let stage_start = Instant::now();
        let graph = export_road_graph(&table, mask.w, mask.h)?;
        timing.export_ms = elapsed_ms(stage_start);
        timing.total_ms = elapsed_ms(total_start);

        Ok(PipelineReport {
            graph,
            skeleton,
            labels,
            timing,
        })
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Reject empty or oversized rasters before any processing, so an invalid
/// input can never produce partial output.
fn validate_dimensions(mask: &Mask) -> Result<(), String> {
    if mask.w == 0 || mask.h == 0 {
        return Err("input raster is empty".to_string());
    }
    let pixels = mask.w as u64 * mask.h as u64;
    if pixels > MAX_PIXELS {
        return Err(format!(
            "input raster has {pixels} pixels, exceeding the {MAX_PIXELS} pixel bound"
        ));
    }
    Ok(())
}
