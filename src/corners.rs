//! Junction detection and clustering into representative corner points.
//!
//! A thinned crossing is rarely a single pixel: the junction predicate fires
//! on a small patch, and nearby crossings can fragment into several patches.
//! A box blur over the junction mask followed by re-binarization fuses
//! patches that belong to the same physical crossing; the centroid of each
//! fused cluster is the corner point the continuity merger reasons from.

use crate::raster::{Mask, FOREGROUND, NEIGH_8};
use crate::types::Pixel;
use log::debug;

/// Side of the box-blur kernel used to fuse adjacent junction clusters.
const BLUR_KERNEL: usize = 7;

/// A junction pixel is a foreground pixel whose 3×3 neighborhood (itself
/// included) holds more than 3 foreground pixels.
#[inline]
pub fn is_junction(skel: &Mask, row: usize, col: usize) -> bool {
    skel.is_fg(row, col) && skel.fg_in_3x3(row, col) > 3
}

/// Find one corner point per junction cluster of the skeleton.
pub fn find_corners(skel: &Mask) -> Vec<Pixel> {
    let mut junctions = Mask::new(skel.w, skel.h);
    for row in 0..skel.h {
        for col in 0..skel.w {
            if is_junction(skel, row, col) {
                junctions.set(row, col, FOREGROUND);
            }
        }
    }

    let fused = blur_and_rebinarize(&junctions);

    let mut corners = Vec::new();
    let mut visited = vec![false; fused.w * fused.h];
    let mut stack: Vec<Pixel> = Vec::new();
    for row in 0..fused.h {
        for col in 0..fused.w {
            if !fused.is_fg(row, col) || visited[fused.idx(row, col)] {
                continue;
            }
            visited[fused.idx(row, col)] = true;
            stack.push(Pixel::new(row as u32, col as u32));
            let (mut sum_row, mut sum_col, mut count) = (0u64, 0u64, 0u64);

            while let Some(p) = stack.pop() {
                sum_row += u64::from(p.row);
                sum_col += u64::from(p.col);
                count += 1;
                for (dr, dc) in NEIGH_8 {
                    let nr = p.row as isize + dr;
                    let nc = p.col as isize + dc;
                    if !fused.is_fg_signed(nr, nc) {
                        continue;
                    }
                    let idx = fused.idx(nr as usize, nc as usize);
                    if !visited[idx] {
                        visited[idx] = true;
                        stack.push(Pixel::new(nr as u32, nc as u32));
                    }
                }
            }
            corners.push(Pixel::new((sum_row / count) as u32, (sum_col / count) as u32));
        }
    }
    debug!("find_corners: {} junction corners", corners.len());
    corners
}

/// 7×7 normalized box blur (zero padding), then re-binarize: any pixel whose
/// blurred value exceeds 1 becomes foreground.
fn blur_and_rebinarize(mask: &Mask) -> Mask {
    let mut out = Mask::new(mask.w, mask.h);
    let half = (BLUR_KERNEL / 2) as isize;
    let area = (BLUR_KERNEL * BLUR_KERNEL) as u32;
    for row in 0..mask.h {
        for col in 0..mask.w {
            let mut sum = 0u32;
            for dr in -half..=half {
                for dc in -half..=half {
                    if mask.is_fg_signed(row as isize + dr, col as isize + dc) {
                        sum += u32::from(FOREGROUND);
                    }
                }
            }
            if sum / area > 1 {
                out.set(row, col, FOREGROUND);
            }
        }
    }
    out
}
