//! Angle utilities used by the continuity merger.

use crate::types::Pixel;

/// Bearing in degrees of `point` as seen from `center`, measured
/// counter-clockwise from east. Image rows grow downwards, so the row delta
/// is negated to keep the usual mathematical orientation. Result in [0, 360).
#[inline]
pub fn bearing_deg(center: Pixel, point: Pixel) -> f32 {
    let dr = -(point.row as f32 - center.row as f32);
    let dc = point.col as f32 - center.col as f32;
    let deg = dr.atan2(dc).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// Smallest circular difference between two bearings in degrees.
///
/// Both inputs are expected in [0, 360); the result is wrapped into
/// [0, 180] so that e.g. 170° and 190° differ by 20°, not 340°.
#[inline]
pub fn circular_difference_deg(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs();
    if diff >= 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn bearing_cardinal_directions() {
        let c = Pixel::new(50, 50);
        assert!(approx_eq(bearing_deg(c, Pixel::new(50, 60)), 0.0));
        assert!(approx_eq(bearing_deg(c, Pixel::new(40, 50)), 90.0));
        assert!(approx_eq(bearing_deg(c, Pixel::new(50, 40)), 180.0));
        assert!(approx_eq(bearing_deg(c, Pixel::new(60, 50)), 270.0));
    }

    #[test]
    fn circular_difference_wraps_at_180() {
        assert!(approx_eq(circular_difference_deg(170.0, 190.0), 20.0));
        assert!(approx_eq(circular_difference_deg(190.0, 170.0), 20.0));
        assert!(approx_eq(circular_difference_deg(0.0, 359.0), 1.0));
        assert!(approx_eq(circular_difference_deg(0.0, 180.0), 180.0));
        assert!(approx_eq(circular_difference_deg(45.0, 45.0), 0.0));
    }

    #[test]
    fn opposite_points_subtend_180() {
        let c = Pixel::new(50, 50);
        let east = bearing_deg(c, Pixel::new(50, 60));
        let west = bearing_deg(c, Pixel::new(50, 40));
        assert!(approx_eq(circular_difference_deg(east, west), 180.0));
    }
}
