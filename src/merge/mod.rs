//! Continuity merging: reconnects road segments across junction corners.
//!
//! Skeletonization splits a physical road into separate segments wherever it
//! crosses another road. For each junction corner this stage decides which
//! of the incident segments are really one continuous road:
//!
//! - A discrete circle around the corner is sampled for the points where
//!   labeled roads cross it ([`sample_intersections`]).
//! - Each intersection point is paired with the other point subtending the
//!   largest circular angle at the corner — its best continuation candidate.
//! - Pairs are processed by subtended angle, descending. A pair merges only
//!   when the angle is near head-on (a sharp angle indicates a branch, not a
//!   continuation) and the segments' nearest chain endpoints are close
//!   enough; each evaluation yields a [`MergeOutcome`] for observability.
//! - A merge orients both chains so the near endpoints meet, bridges the
//!   residual gap with an 8-connected pixel run, concatenates, erases the
//!   absorbed table entry and repaints the label raster — table and raster
//!   stay mutually consistent.
//!
//! Corners are processed independently over the shared segment table, so
//! processing order affects which id survives a chain of merges but not the
//! final connectivity.

mod bridge;
mod sampling;

pub use bridge::bridge_pixels;
pub use sampling::sample_intersections;

use crate::angle::{bearing_deg, circular_difference_deg};
use crate::labeling::SegmentTable;
use crate::raster::LabelRaster;
use crate::types::{Pixel, RoadId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Options controlling the continuity merger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Radius in pixels of the sampling circle walked around each corner.
    pub sample_radius_px: u32,
    /// Minimum subtended angle in degrees for a pair to count as one road.
    pub min_continuation_angle_deg: f32,
    /// Maximum distance in pixels between the chain endpoints being joined.
    pub max_endpoint_dist_px: f32,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            sample_radius_px: 10,
            min_continuation_angle_deg: 130.0,
            max_endpoint_dist_px: 20.0,
        }
    }
}

/// Outcome of evaluating one intersection pair at a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The pair was joined into one road.
    Merged,
    /// The subtended angle indicated a branch rather than a continuation.
    AngleTooSmall,
    /// Either point was consumed by an earlier, higher-priority pairing.
    AlreadyConsumed,
    /// Both points already resolve to the same road.
    SameRoad,
    /// The angle test passed but the nearest chain endpoints were too far
    /// apart to join.
    EndpointsTooFar,
}

/// An intersection point, its best continuation candidate and the circular
/// angle the two subtend at the corner.
#[derive(Clone, Copy, Debug)]
struct Pairing {
    start: Pixel,
    partner: Pixel,
    angle_deg: f32,
}

/// Which end of an ordered pixel chain an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChainEnd {
    Front,
    Back,
}

/// Run the continuity merger over every corner, mutating the segment table
/// and label raster in place. Returns the outcome of every pair evaluation,
/// in processing order.
pub fn merge_continuous_roads(
    corners: &[Pixel],
    table: &mut SegmentTable,
    labels: &mut LabelRaster,
    options: &MergeOptions,
) -> Vec<MergeOutcome> {
    let mut outcomes = Vec::new();
    for &corner in corners {
        let hits = sample_intersections(labels, corner, options.sample_radius_px);
        let pairings = rank_pairings(&hits, corner);
        // Endpoints consumed at this corner; a segment merges at most once
        // per corner per pass.
        let mut consumed: Vec<Pixel> = Vec::new();
        for pairing in &pairings {
            let outcome = evaluate_pairing(pairing, table, labels, &mut consumed, options);
            debug!(
                "corner ({}, {}): {:?} / {:?} at {:.1}° -> {:?}",
                corner.row, corner.col, pairing.start, pairing.partner, pairing.angle_deg, outcome
            );
            outcomes.push(outcome);
        }
    }
    let merged = outcomes
        .iter()
        .filter(|&&o| o == MergeOutcome::Merged)
        .count();
    debug!("merge_continuous_roads: {merged} merges, {} roads remain", table.len());
    outcomes
}

/// Pair every intersection point with the point subtending the largest
/// circular angle at the corner, sorted by that angle, descending.
fn rank_pairings(hits: &[Pixel], corner: Pixel) -> Vec<Pairing> {
    let mut pairings = Vec::new();
    for (i, &start) in hits.iter().enumerate() {
        let start_bearing = bearing_deg(corner, start);
        let mut best: Option<(Pixel, f32)> = None;
        for (j, &other) in hits.iter().enumerate() {
            if i == j {
                continue;
            }
            let diff = circular_difference_deg(start_bearing, bearing_deg(corner, other));
            if best.map_or(true, |(_, d)| diff > d) {
                best = Some((other, diff));
            }
        }
        if let Some((partner, angle_deg)) = best {
            pairings.push(Pairing {
                start,
                partner,
                angle_deg,
            });
        }
    }
    pairings.sort_by(|a, b| b.angle_deg.total_cmp(&a.angle_deg));
    pairings
}

fn evaluate_pairing(
    pairing: &Pairing,
    table: &mut SegmentTable,
    labels: &mut LabelRaster,
    consumed: &mut Vec<Pixel>,
    options: &MergeOptions,
) -> MergeOutcome {
    if pairing.angle_deg < options.min_continuation_angle_deg {
        return MergeOutcome::AngleTooSmall;
    }
    if consumed.contains(&pairing.start) || consumed.contains(&pairing.partner) {
        return MergeOutcome::AlreadyConsumed;
    }

    // Re-resolve road ids now: earlier merges at other corners may have
    // repainted either point. Sampling only records labeled pixels and
    // merges never unpaint, so both lookups succeed.
    let first = labels.road_at(pairing.start.row as usize, pairing.start.col as usize);
    let second = labels.road_at(pairing.partner.row as usize, pairing.partner.col as usize);
    let (Some(first), Some(second)) = (first, second) else {
        return MergeOutcome::AlreadyConsumed;
    };
    if first == second {
        consumed.push(pairing.start);
        consumed.push(pairing.partner);
        return MergeOutcome::SameRoad;
    }

    let (Some(first_chain), Some(second_chain)) = (table.pixels(first), table.pixels(second))
    else {
        return MergeOutcome::AlreadyConsumed;
    };
    let (first_end, second_end, min_dist) = nearest_endpoints(first_chain, second_chain);
    if min_dist > options.max_endpoint_dist_px {
        // The pair still consumes both points, so a lower-priority pairing
        // cannot re-test either of them at this corner.
        consumed.push(pairing.start);
        consumed.push(pairing.partner);
        return MergeOutcome::EndpointsTooFar;
    }

    splice(table, labels, first, second, first_end, second_end);
    consumed.push(pairing.start);
    consumed.push(pairing.partner);
    MergeOutcome::Merged
}

#[inline]
fn end_pixel(chain: &[Pixel], end: ChainEnd) -> Pixel {
    match end {
        ChainEnd::Front => chain[0],
        ChainEnd::Back => chain[chain.len() - 1],
    }
}

/// Nearest pair of chain endpoints over all 4 front/back combinations.
fn nearest_endpoints(first: &[Pixel], second: &[Pixel]) -> (ChainEnd, ChainEnd, f32) {
    let mut best = (ChainEnd::Front, ChainEnd::Front, f32::INFINITY);
    for first_end in [ChainEnd::Front, ChainEnd::Back] {
        for second_end in [ChainEnd::Front, ChainEnd::Back] {
            let d = end_pixel(first, first_end).dist(&end_pixel(second, second_end));
            if d < best.2 {
                best = (first_end, second_end, d);
            }
        }
    }
    best
}

/// Concatenate `absorbed` onto `survivor`: orient both chains so the chosen
/// endpoints meet, interpolate the residual gap, erase the absorbed entry
/// and repaint every pixel of the merged chain in the label raster.
fn splice(
    table: &mut SegmentTable,
    labels: &mut LabelRaster,
    survivor: RoadId,
    absorbed: RoadId,
    survivor_end: ChainEnd,
    absorbed_end: ChainEnd,
) {
    let Some(mut absorbed_chain) = table.remove(absorbed) else {
        return;
    };
    let Some(chain) = table.pixels_mut(survivor) else {
        return;
    };
    if survivor_end == ChainEnd::Front {
        chain.reverse();
    }
    if absorbed_end == ChainEnd::Back {
        absorbed_chain.reverse();
    }

    let gap = bridge_pixels(chain[chain.len() - 1], absorbed_chain[0]);
    // Chains never contain duplicates; keep that true for bridge pixels.
    for p in gap {
        if !chain.contains(&p) && !absorbed_chain.contains(&p) {
            chain.push(p);
        }
    }
    chain.append(&mut absorbed_chain);

    for p in chain.iter() {
        labels.paint(*p, survivor);
    }
}
