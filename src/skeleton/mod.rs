//! Morphological thinning of a road mask to a 1-pixel skeleton.
//!
//! Two rule families run in sequence, each iterated to a fixed point:
//!
//! - [`zhang_suen`] converges quickly to a coarse skeleton;
//! - [`guo_hall`] then removes the residual non-minimal branches the first
//!   family leaves behind.
//!
//! Each family alternates an even/odd sub-iteration pair; deletion marks are
//! collected over a full scan and applied afterwards, never while scanning.
//! After each family converges the image border is forced to background,
//! then border pixels whose single inward neighbor is foreground are
//! restored so connectivity is not severed at the image edge.
//!
//! The result has no 2×2 fully-foreground block, and re-running the
//! skeletonizer on its own output changes nothing.

mod guo_hall;
mod zhang_suen;

use crate::raster::{Mask, FOREGROUND};

/// Thin `mask` to a 1-pixel-wide skeleton.
pub fn skeletonize(mask: &Mask) -> Mask {
    let mut skel = mask.clone();
    run_to_fixed_point(&mut skel, zhang_suen::thin_iteration);
    repair_border(&mut skel);
    run_to_fixed_point(&mut skel, guo_hall::thin_iteration);
    repair_border(&mut skel);
    skel
}

/// Apply the (even, odd) sub-iteration pair until a full pair deletes
/// nothing.
fn run_to_fixed_point(skel: &mut Mask, iteration: fn(&mut Mask, u8)) {
    let mut prev = skel.data.clone();
    loop {
        iteration(skel, 0);
        iteration(skel, 1);
        if skel.data == prev {
            break;
        }
        prev.copy_from_slice(&skel.data);
    }
}

/// Zero the border, then restore border pixels whose single inward neighbor
/// (same row/col, one step toward the interior) is foreground.
fn repair_border(skel: &mut Mask) {
    if skel.w < 2 || skel.h < 2 {
        return;
    }
    let (w, h) = (skel.w, skel.h);
    for row in 0..h {
        for col in 0..w {
            if row != 0 && col != 0 && row != h - 1 && col != w - 1 {
                continue;
            }
            skel.set(row, col, 0);
            if row == 0 && skel.is_fg(1, col) {
                skel.set(row, col, FOREGROUND);
            }
            if row == h - 1 && skel.is_fg(h - 2, col) {
                skel.set(row, col, FOREGROUND);
            }
            if col == 0 && skel.is_fg(row, 1) {
                skel.set(row, col, FOREGROUND);
            }
            if col == w - 1 && skel.is_fg(row, w - 2) {
                skel.set(row, col, FOREGROUND);
            }
        }
    }
}

/// Ring neighbors p2..p9 of (row, col) as 0/1 values, clockwise from north:
/// p2 = (row-1, col), p3 = (row-1, col+1), …, p9 = (row-1, col-1).
#[inline]
pub(crate) fn ring(skel: &Mask, row: usize, col: usize) -> [u8; 8] {
    let fg = |r: usize, c: usize| u8::from(skel.is_fg(r, c));
    [
        fg(row - 1, col),
        fg(row - 1, col + 1),
        fg(row, col + 1),
        fg(row + 1, col + 1),
        fg(row + 1, col),
        fg(row + 1, col - 1),
        fg(row, col - 1),
        fg(row - 1, col - 1),
    ]
}

/// Clear every marked pixel.
pub(crate) fn apply_marks(skel: &mut Mask, marks: &[bool]) {
    for (v, &marked) in skel.data.iter_mut().zip(marks) {
        if marked {
            *v = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thick_bar(w: usize, h: usize, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) -> Mask {
        let mut m = Mask::new(w, h);
        for row in rows {
            for col in cols.clone() {
                m.set(row, col, FOREGROUND);
            }
        }
        m
    }

    fn has_2x2_block(m: &Mask) -> bool {
        for row in 0..m.h - 1 {
            for col in 0..m.w - 1 {
                if m.is_fg(row, col)
                    && m.is_fg(row, col + 1)
                    && m.is_fg(row + 1, col)
                    && m.is_fg(row + 1, col + 1)
                {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn bar_thins_to_single_pixel_width() {
        let bar = thick_bar(100, 40, 15..22, 20..80);
        let skel = skeletonize(&bar);
        assert!(skel.count_fg() > 0, "skeleton vanished entirely");
        assert!(!has_2x2_block(&skel));
        // Every skeleton column inside the bar core carries at most one pixel.
        for col in 25..75 {
            let in_col = (0..40).filter(|&row| skel.is_fg(row, col)).count();
            assert!(in_col <= 1, "column {col} is {in_col} pixels wide");
        }
    }

    #[test]
    fn thinning_is_idempotent() {
        let bar = thick_bar(120, 60, 20..30, 10..110);
        let once = skeletonize(&bar);
        let twice = skeletonize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_mask_stays_empty() {
        let m = Mask::new(16, 16);
        assert_eq!(skeletonize(&m).count_fg(), 0);
    }
}
