//! 8-connected line rasterization for bridging merged chain endpoints.

use crate::types::Pixel;

/// Pixels strictly between `a` and `b` along an 8-connected Bresenham line.
/// Empty when the endpoints already touch. Consecutive output pixels are
/// Chebyshev-adjacent, so appending the run between two chains keeps the
/// merged chain 8-connected without duplicating either endpoint.
pub fn bridge_pixels(a: Pixel, b: Pixel) -> Vec<Pixel> {
    let mut line = raster_line(a, b);
    if line.len() <= 2 {
        return Vec::new();
    }
    line.pop();
    line.remove(0);
    line
}

/// Full 8-connected Bresenham run from `a` to `b`, inclusive.
fn raster_line(a: Pixel, b: Pixel) -> Vec<Pixel> {
    let (mut row, mut col) = (a.row as i64, a.col as i64);
    let (end_row, end_col) = (b.row as i64, b.col as i64);
    let d_row = (end_row - row).abs();
    let d_col = (end_col - col).abs();
    let step_row = if row < end_row { 1 } else { -1 };
    let step_col = if col < end_col { 1 } else { -1 };
    let mut err = d_col - d_row;

    let mut out = Vec::with_capacity((d_row.max(d_col) + 1) as usize);
    loop {
        out.push(Pixel::new(row as u32, col as u32));
        if row == end_row && col == end_col {
            break;
        }
        let e2 = 2 * err;
        if e2 > -d_row {
            err -= d_row;
            col += step_col;
        }
        if e2 < d_col {
            err += d_col;
            row += step_row;
        }
    }
    out
}
