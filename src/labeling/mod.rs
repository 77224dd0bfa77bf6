//! Connected-segment labeling of the skeleton.
//!
//! Labeling runs twice. The discovery pass flood-fills the skeleton into
//! maximal junction-to-junction segments: a junction pixel is collected but
//! never expanded past, so fills stop at crossings. Junction regions are
//! several pixels wide, which leaves a rim of unclaimed pixels around every
//! crossing; [`assign_junction_pixels`] adopts each of them into the nearest
//! labeled neighbor. The second pass, [`rebuild_ordered`], re-derives every
//! segment from the fully colored label raster as a connectivity-ordered
//! chain — new pixels are appended to whichever chain end is nearer, which
//! approximates a continuous walk along the road. Ordered chains are what
//! makes the endpoint-distance logic of the continuity merger meaningful.
//!
//! Segments of two or fewer pixels are noise and are excluded from the
//! label raster and all downstream stages.

mod table;

pub use table::SegmentTable;

use crate::corners::is_junction;
use crate::raster::{LabelRaster, Mask, NEIGH_8};
use crate::types::Pixel;
use log::debug;

/// Minimum pixel count for a segment to survive labeling.
const MIN_SEGMENT_PIXELS: usize = 3;

/// Discovery pass: flood-fill the skeleton into junction-bounded segments
/// and paint the surviving ones into a fresh label raster.
pub fn label_initial_segments(skel: &Mask) -> (SegmentTable, LabelRaster) {
    let mut table = SegmentTable::new();
    let mut visited = vec![false; skel.w * skel.h];
    let mut stack: Vec<Pixel> = Vec::with_capacity(64);

    for row in 0..skel.h {
        for col in 0..skel.w {
            if !skel.is_fg(row, col) || visited[skel.idx(row, col)] {
                continue;
            }
            let mut pixels = Vec::new();
            visited[skel.idx(row, col)] = true;
            stack.push(Pixel::new(row as u32, col as u32));

            while let Some(p) = stack.pop() {
                pixels.push(p);
                // Junction pixels belong to the segment but bound the fill.
                if is_junction(skel, p.row as usize, p.col as usize) {
                    continue;
                }
                for (dr, dc) in NEIGH_8 {
                    let nr = p.row as isize + dr;
                    let nc = p.col as isize + dc;
                    if !skel.is_fg_signed(nr, nc) {
                        continue;
                    }
                    let idx = skel.idx(nr as usize, nc as usize);
                    if !visited[idx] {
                        visited[idx] = true;
                        stack.push(Pixel::new(nr as u32, nc as u32));
                    }
                }
            }
            table.insert(pixels);
        }
    }

    let labels = paint_labels(&table, skel.w, skel.h);
    debug!(
        "label_initial_segments: {} segments discovered",
        table.len()
    );
    (table, labels)
}

/// Adopt each still-unlabeled skeleton pixel into the segment of a labeled
/// 3×3 neighbor, preferring neighbors at distance exactly 1 (4-connected)
/// over diagonal ones; the first match in scan order wins. Writes target a
/// copy so assignments cannot cascade within the pass.
pub fn assign_junction_pixels(skel: &Mask, labels: &LabelRaster) -> LabelRaster {
    let mut out = labels.clone();
    let mut assigned = 0usize;
    for row in 0..skel.h {
        for col in 0..skel.w {
            if !skel.is_fg(row, col) || labels.is_labeled(row, col) {
                continue;
            }
            let id = adjacent_label(labels, row, col, true)
                .or_else(|| adjacent_label(labels, row, col, false));
            if let Some(id) = id {
                out.set(row, col, id);
                assigned += 1;
            }
        }
    }
    debug!("assign_junction_pixels: adopted {assigned} junction pixels");
    out
}

/// First labeled 3×3 neighbor in scan order, restricted to 4-neighbors when
/// `orthogonal` is set and to diagonals otherwise.
fn adjacent_label(
    labels: &LabelRaster,
    row: usize,
    col: usize,
    orthogonal: bool,
) -> Option<crate::types::RoadId> {
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if (dr == 0 && dc == 0) || ((dr.abs() + dc.abs() == 1) != orthogonal) {
                continue;
            }
            if let Some(id) = labels.road_at_signed(row as isize + dr, col as isize + dc) {
                return Some(id);
            }
        }
    }
    None
}

/// Ordered rebuild: re-derive each segment from its id-blob in the label
/// raster, appending every newly visited pixel to the nearer chain end.
/// Returns a fresh table (new ids) and a raster repainted from it.
pub fn rebuild_ordered(labels: &LabelRaster) -> (SegmentTable, LabelRaster) {
    let mut table = SegmentTable::new();
    let mut visited = vec![false; labels.w * labels.h];
    let mut stack: Vec<Pixel> = Vec::with_capacity(64);
    let mut dropped = 0usize;

    for row in 0..labels.h {
        for col in 0..labels.w {
            let seed_id = match labels.road_at(row, col) {
                Some(id) if !visited[row * labels.w + col] => id,
                _ => continue,
            };
            let mut chain: Vec<Pixel> = Vec::new();
            visited[row * labels.w + col] = true;
            stack.push(Pixel::new(row as u32, col as u32));

            while let Some(p) = stack.pop() {
                append_nearest_end(&mut chain, p);
                for (dr, dc) in NEIGH_8 {
                    let nr = p.row as isize + dr;
                    let nc = p.col as isize + dc;
                    if labels.road_at_signed(nr, nc) != Some(seed_id) {
                        continue;
                    }
                    let idx = nr as usize * labels.w + nc as usize;
                    if !visited[idx] {
                        visited[idx] = true;
                        stack.push(Pixel::new(nr as u32, nc as u32));
                    }
                }
            }
            if chain.len() >= MIN_SEGMENT_PIXELS {
                table.insert(chain);
            } else {
                dropped += 1;
            }
        }
    }

    let out = paint_labels(&table, labels.w, labels.h);
    debug!(
        "rebuild_ordered: {} ordered segments, {dropped} dropped as noise",
        table.len()
    );
    (table, out)
}

/// Append `p` to whichever end of `chain` is nearer, reversing the chain in
/// place first when the front is nearer.
fn append_nearest_end(chain: &mut Vec<Pixel>, p: Pixel) {
    if let (Some(front), Some(back)) = (chain.first(), chain.last()) {
        if p.dist(front) < p.dist(back) {
            chain.reverse();
        }
    }
    chain.push(p);
}

/// Paint a label raster from every table segment above the noise threshold.
fn paint_labels(table: &SegmentTable, w: usize, h: usize) -> LabelRaster {
    let mut labels = LabelRaster::new(w, h);
    for (id, pixels) in table.iter() {
        if pixels.len() >= MIN_SEGMENT_PIXELS {
            for p in pixels {
                labels.paint(*p, id);
            }
        }
    }
    labels
}

#[cfg(test)]
mod tests;
