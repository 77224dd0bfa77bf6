//! Zhang-Suen thinning sub-iteration (rule family A).

use super::{apply_marks, ring};
use crate::raster::Mask;

/// One sub-iteration over all interior pixels. `parity` selects which
/// neighbor triples gate deletion: sub-iteration 0 uses {p2,p4,p6} and
/// {p4,p6,p8}; sub-iteration 1 uses {p2,p4,p8} and {p2,p6,p8}.
pub(super) fn thin_iteration(skel: &mut Mask, parity: u8) {
    if skel.w < 3 || skel.h < 3 {
        return;
    }
    let mut marks = vec![false; skel.w * skel.h];
    for row in 1..skel.h - 1 {
        for col in 1..skel.w - 1 {
            if !skel.is_fg(row, col) {
                continue;
            }
            let [p2, p3, p4, p5, p6, p7, p8, p9] = ring(skel, row, col);

            // 0→1 transitions walking the ring clockwise.
            let a = u32::from(p2 == 0 && p3 == 1)
                + u32::from(p3 == 0 && p4 == 1)
                + u32::from(p4 == 0 && p5 == 1)
                + u32::from(p5 == 0 && p6 == 1)
                + u32::from(p6 == 0 && p7 == 1)
                + u32::from(p7 == 0 && p8 == 1)
                + u32::from(p8 == 0 && p9 == 1)
                + u32::from(p9 == 0 && p2 == 1);
            let b: u32 = [p2, p3, p4, p5, p6, p7, p8, p9]
                .iter()
                .map(|&p| u32::from(p))
                .sum();
            let m1 = if parity == 0 { p2 * p4 * p6 } else { p2 * p4 * p8 };
            let m2 = if parity == 0 { p4 * p6 * p8 } else { p2 * p6 * p8 };

            if a == 1 && (2..=6).contains(&b) && m1 == 0 && m2 == 0 {
                marks[skel.idx(row, col)] = true;
            }
        }
    }
    apply_marks(skel, &marks);
}
