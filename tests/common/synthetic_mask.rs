use road_vectorizer::raster::{Mask, FOREGROUND};

/// Fills the horizontal band `row ± half_width` between `c0..=c1`.
pub fn thick_hline(mask: &mut Mask, row: usize, c0: usize, c1: usize, half_width: usize) {
    for r in row.saturating_sub(half_width)..=(row + half_width).min(mask.h - 1) {
        for c in c0..=c1.min(mask.w - 1) {
            mask.set(r, c, FOREGROUND);
        }
    }
}

/// Fills the vertical band `col ± half_width` between `r0..=r1`.
pub fn thick_vline(mask: &mut Mask, col: usize, r0: usize, r1: usize, half_width: usize) {
    for r in r0..=r1.min(mask.h - 1) {
        for c in col.saturating_sub(half_width)..=(col + half_width).min(mask.w - 1) {
            mask.set(r, c, FOREGROUND);
        }
    }
}

/// Two thick bars crossing at (center, center).
pub fn crossing_mask(size: usize, margin: usize, half_width: usize) -> Mask {
    let mut mask = Mask::new(size, size);
    let center = size / 2;
    thick_hline(&mut mask, center, margin, size - 1 - margin, half_width);
    thick_vline(&mut mask, center, margin, size - 1 - margin, half_width);
    mask
}

/// A horizontal thick bar with a stem dropping from its middle.
pub fn t_junction_mask(size: usize, margin: usize, half_width: usize) -> Mask {
    let mut mask = Mask::new(size, size);
    let center = size / 2;
    thick_hline(&mut mask, center, margin, size - 1 - margin, half_width);
    thick_vline(&mut mask, center, center, size - 1 - margin, half_width);
    mask
}

/// A filled square of `side × side` pixels with its top-left at (row, col).
pub fn square_blob(mask: &mut Mask, row: usize, col: usize, side: usize) {
    for r in row..(row + side).min(mask.h) {
        for c in col..(col + side).min(mask.w) {
            mask.set(r, c, FOREGROUND);
        }
    }
}
