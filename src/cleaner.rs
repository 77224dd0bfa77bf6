//! Mask cleanup passes run before and after thinning.
//!
//! - [`fill_gaps`] closes small background holes left by noisy thresholding.
//! - [`remove_small_blobs`] deletes isolated foreground specks.
//! - [`remove_spikes`] erases short skeleton spurs created by thinning.
//!
//! All region traversals use an explicit stack over a marker grid, and the
//! two blob passes abort region growth a small margin past their size
//! threshold so a single huge open area never costs more than its bound.

use crate::raster::{Mask, FOREGROUND, NEIGH_4, NEIGH_8};
use crate::types::Pixel;
use log::debug;

/// Extra pixels a region fill may collect past its size threshold before the
/// traversal is abandoned.
const FLOOD_ABORT_MARGIN: usize = 10;

/// Fill every connected background region of at most `max_gap` pixels with
/// foreground. Regions are 4-connected; growth aborts once the region is
/// provably above the threshold.
pub fn fill_gaps(mask: &mut Mask, max_gap: usize) {
    let mut fill = RegionFill::new(mask.w * mask.h);
    let mut filled = 0usize;
    for row in 0..mask.h {
        for col in 0..mask.w {
            if fill.claimed(mask.idx(row, col)) || mask.is_fg(row, col) {
                continue;
            }
            let region = fill.collect(mask, row, col, false, max_gap, &NEIGH_4);
            if region.len() <= max_gap {
                for p in &region {
                    mask.set(p.row as usize, p.col as usize, FOREGROUND);
                }
                filled += region.len();
            }
        }
    }
    debug!("fill_gaps: repainted {filled} background pixels");
}

/// Remove every connected foreground blob of fewer than `min_blob` pixels.
/// Blobs are 4-connected, with the same abort margin as [`fill_gaps`].
pub fn remove_small_blobs(mask: &mut Mask, min_blob: usize) {
    let mut fill = RegionFill::new(mask.w * mask.h);
    let mut removed = 0usize;
    for row in 0..mask.h {
        for col in 0..mask.w {
            if fill.claimed(mask.idx(row, col)) || !mask.is_fg(row, col) {
                continue;
            }
            let region = fill.collect(mask, row, col, true, min_blob, &NEIGH_4);
            if region.len() < min_blob {
                for p in &region {
                    mask.set(p.row as usize, p.col as usize, 0);
                }
                removed += region.len();
            }
        }
    }
    debug!("remove_small_blobs: erased {removed} foreground pixels");
}

/// Reusable flood-fill scratch.
///
/// Membership marks are stamped per generation so an aborted walk never
/// truncates a later walk of the same region: every seed sees the true
/// region size up to its cap. Pixels collected by any walk are `claimed`
/// and skipped as future seeds.
struct RegionFill {
    stamp: Vec<u32>,
    generation: u32,
    claimed: Vec<bool>,
    stack: Vec<Pixel>,
}

impl RegionFill {
    fn new(n: usize) -> Self {
        Self {
            stamp: vec![0; n],
            generation: 0,
            claimed: vec![false; n],
            stack: Vec::with_capacity(64),
        }
    }

    #[inline]
    fn claimed(&self, idx: usize) -> bool {
        self.claimed[idx]
    }

    /// Collect the connected region of `foreground`-valued pixels seeded at
    /// (row, col), giving up once the region exceeds `size_cap` by
    /// [`FLOOD_ABORT_MARGIN`].
    fn collect(
        &mut self,
        mask: &Mask,
        row: usize,
        col: usize,
        foreground: bool,
        size_cap: usize,
        offsets: &[(isize, isize)],
    ) -> Vec<Pixel> {
        self.generation += 1;
        let gen = self.generation;
        let mut region = Vec::new();

        self.stack.clear();
        self.stack.push(Pixel::new(row as u32, col as u32));
        self.stamp[mask.idx(row, col)] = gen;

        while let Some(p) = self.stack.pop() {
            if region.len() > size_cap + FLOOD_ABORT_MARGIN {
                self.stack.clear();
                break;
            }
            self.claimed[mask.idx(p.row as usize, p.col as usize)] = true;
            region.push(p);
            for (dr, dc) in offsets {
                let nr = p.row as isize + dr;
                let nc = p.col as isize + dc;
                if nr < 0 || nc < 0 || nr >= mask.h as isize || nc >= mask.w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                let idx = mask.idx(nr, nc);
                if self.stamp[idx] == gen || mask.is_fg(nr, nc) != foreground {
                    continue;
                }
                self.stamp[idx] = gen;
                self.stack.push(Pixel::new(nr as u32, nc as u32));
            }
        }
        region
    }
}

/// Erase skeleton spurs: from every endpoint (a foreground pixel whose 3×3
/// neighborhood holds exactly two foreground pixels, itself included), trace
/// outward while the trace stays off junction pixels, hard-capped at
/// `2 × max_len` pixels. Runs of at most `max_len` pixels are erased.
///
/// Mutates in place so endpoints reached later in the scan see earlier
/// erasures.
pub fn remove_spikes(skeleton: &mut Mask, max_len: usize) {
    let mut erased = 0usize;
    for row in 0..skeleton.h {
        for col in 0..skeleton.w {
            if !skeleton.is_fg(row, col) || skeleton.fg_in_3x3(row, col) != 2 {
                continue;
            }
            let run = trace_spike(skeleton, row, col, max_len);
            if run.len() <= max_len {
                for p in &run {
                    skeleton.set(p.row as usize, p.col as usize, 0);
                }
                erased += run.len();
            }
        }
    }
    debug!("remove_spikes: erased {erased} spur pixels");
}

fn trace_spike(skeleton: &Mask, row: usize, col: usize, max_len: usize) -> Vec<Pixel> {
    let mut run: Vec<Pixel> = Vec::new();
    let mut stack = vec![Pixel::new(row as u32, col as u32)];

    while let Some(p) = stack.pop() {
        if run.len() > 2 * max_len {
            break;
        }
        if run.contains(&p) {
            continue;
        }
        // Entering a junction means the spur has rejoined the network.
        if skeleton.fg_in_3x3(p.row as usize, p.col as usize) > 3 {
            continue;
        }
        run.push(p);
        for (dr, dc) in NEIGH_8 {
            let nr = p.row as isize + dr;
            let nc = p.col as isize + dc;
            if skeleton.is_fg_signed(nr, nc) {
                stack.push(Pixel::new(nr as u32, nc as u32));
            }
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with(w: usize, h: usize, pixels: &[(usize, usize)]) -> Mask {
        let mut m = Mask::new(w, h);
        for &(row, col) in pixels {
            m.set(row, col, FOREGROUND);
        }
        m
    }

    #[test]
    fn small_gap_is_filled() {
        // A 3×3 hole inside a solid block.
        let mut m = Mask::new(20, 20);
        for row in 0..20 {
            for col in 0..20 {
                m.set(row, col, FOREGROUND);
            }
        }
        for row in 8..11 {
            for col in 8..11 {
                m.set(row, col, 0);
            }
        }
        fill_gaps(&mut m, 60);
        assert_eq!(m.count_fg(), 400);
    }

    #[test]
    fn large_gap_is_kept_whole() {
        let mut m = Mask::new(40, 40);
        for col in 0..40 {
            m.set(0, col, FOREGROUND);
        }
        // The remaining 39×40 background region is far above the threshold;
        // no chunk of it may be filled even though the walk aborts early.
        fill_gaps(&mut m, 60);
        assert_eq!(m.count_fg(), 40);
    }

    #[test]
    fn hundred_pixel_blob_is_removed_at_threshold_250() {
        let mut m = Mask::new(200, 200);
        for row in 50..60 {
            for col in 50..60 {
                m.set(row, col, FOREGROUND);
            }
        }
        assert_eq!(m.count_fg(), 100);
        remove_small_blobs(&mut m, 250);
        assert_eq!(m.count_fg(), 0);
    }

    #[test]
    fn large_blob_survives() {
        let mut m = Mask::new(200, 200);
        for row in 50..70 {
            for col in 50..70 {
                m.set(row, col, FOREGROUND);
            }
        }
        remove_small_blobs(&mut m, 250);
        assert_eq!(m.count_fg(), 400);
    }

    #[test]
    fn short_spike_is_erased_without_touching_the_road() {
        // Horizontal 50-pixel road with a 4-pixel perpendicular spur. The
        // spur pixel abutting the road reads as a junction during the trace,
        // so the trace erases the spur's free end and leaves at most the
        // base pixel behind.
        let mut pixels: Vec<(usize, usize)> = (0..50).map(|col| (10, col)).collect();
        pixels.extend([(9, 25), (8, 25), (7, 25), (6, 25)]);
        let mut m = mask_with(60, 20, &pixels);

        remove_spikes(&mut m, 10);

        for col in 0..50 {
            assert!(m.is_fg(10, col), "road pixel (10, {col}) was erased");
        }
        let residue = m.count_fg() - 50;
        assert!(residue <= 1, "spur left {residue} pixels behind");
        assert!(!m.is_fg(6, 25) && !m.is_fg(7, 25) && !m.is_fg(8, 25));
    }

    #[test]
    fn long_road_endpoints_are_not_erased() {
        let pixels: Vec<(usize, usize)> = (0..50).map(|col| (10, col)).collect();
        let mut m = mask_with(60, 20, &pixels);
        remove_spikes(&mut m, 10);
        assert_eq!(m.count_fg(), 50);
    }
}
