//! Circle sampling around a junction corner.

use crate::raster::LabelRaster;
use crate::types::Pixel;

/// Degrees skipped after each hit, so one road's wide junction footprint is
/// not re-detected as several intersections.
const SKIP_AFTER_HIT_DEG: i32 = 30;

/// Walk a discrete circle of `radius` pixels around `corner` at 1° steps and
/// record where labeled roads cross it. At each step the 3×3 block around
/// the boundary pixel is probed for the first labeled pixel not recorded
/// yet; every hit advances the walk by [`SKIP_AFTER_HIT_DEG`].
pub fn sample_intersections(labels: &LabelRaster, corner: Pixel, radius: u32) -> Vec<Pixel> {
    let mut intersections: Vec<Pixel> = Vec::new();
    let mut angle = 0i32;
    while angle < 360 {
        let rad = (angle as f32).to_radians();
        let boundary_row = (corner.row as f32 + radius as f32 * rad.sin()) as i64;
        let boundary_col = (corner.col as f32 + radius as f32 * rad.cos()) as i64;

        'probe: for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                let row = boundary_row + dr;
                let col = boundary_col + dc;
                if labels.road_at_signed(row as isize, col as isize).is_none() {
                    continue;
                }
                let p = Pixel::new(row as u32, col as u32);
                if !intersections.contains(&p) {
                    intersections.push(p);
                    angle += SKIP_AFTER_HIT_DEG;
                    break 'probe;
                }
            }
        }
        angle += 1;
    }
    intersections
}
