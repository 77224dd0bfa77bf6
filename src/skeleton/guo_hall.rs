//! Guo-Hall thinning sub-iteration (rule family B).

use super::{apply_marks, ring};
use crate::raster::Mask;

/// One sub-iteration over all interior pixels. Deletes a pixel when the
/// connectivity number C is 1, the minimum of the two run sums N1/N2 lies in
/// [2, 3], and the parity-dependent single-bit test m is 0.
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

            let c = u32::from((p2 ^ 1) & (p3 | p4))
                + u32::from((p4 ^ 1) & (p5 | p6))
                + u32::from((p6 ^ 1) & (p7 | p8))
                + u32::from((p8 ^ 1) & (p9 | p2));
            let n1 = u32::from(p9 | p2) + u32::from(p3 | p4) + u32::from(p5 | p6) + u32::from(p7 | p8);
            let n2 = u32::from(p2 | p3) + u32::from(p4 | p5) + u32::from(p6 | p7) + u32::from(p8 | p9);
            let n = n1.min(n2);
            let m = if parity == 0 {
                (p6 | p7 | (p9 ^ 1)) & p8
            } else {
                (p2 | p3 | (p5 ^ 1)) & p4
            };

            if c == 1 && (2..=3).contains(&n) && m == 0 {
                marks[skel.idx(row, col)] = true;
            }
        }
    }
    apply_marks(skel, &marks);
}
