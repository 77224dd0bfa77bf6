//! Owned single-channel binary raster in row-major layout.
//!
//! Pixels are `0` (background) or [`FOREGROUND`] (road). All neighbor probes
//! take signed coordinates and treat out-of-bounds as background, so callers
//! never need their own bounds arithmetic.

/// Value of a foreground (road) pixel.
pub const FOREGROUND: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, one byte per pixel
    pub data: Vec<u8>,
}

impl Mask {
    /// Construct an all-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Construct a mask from raw bytes; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h, "mask buffer does not match dimensions");
        Self { w, h, data }
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }

    #[inline]
    pub fn is_fg(&self, row: usize, col: usize) -> bool {
        self.data[self.idx(row, col)] != 0
    }

    /// Signed-coordinate foreground probe; out-of-bounds reads as background.
    #[inline]
    pub fn is_fg_signed(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 || row >= self.h as isize || col >= self.w as isize {
            return false;
        }
        self.is_fg(row as usize, col as usize)
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: u8) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    /// Number of foreground pixels in the 3×3 block centred on (row, col),
    /// the centre pixel included. Out-of-bounds cells count as background.
    pub fn fg_in_3x3(&self, row: usize, col: usize) -> u32 {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if self.is_fg_signed(row as isize + dr, col as isize + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total number of foreground pixels.
    pub fn count_fg(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_count_is_bounds_guarded() {
        let mut m = Mask::new(3, 3);
        m.set(0, 0, FOREGROUND);
        m.set(0, 1, FOREGROUND);
        m.set(1, 0, FOREGROUND);
        // Corner pixel: probes above and left fall outside and read as background.
        assert_eq!(m.fg_in_3x3(0, 0), 3);
        assert!(!m.is_fg_signed(-1, 0));
        assert!(!m.is_fg_signed(0, 3));
    }

    #[test]
    fn count_fg_counts_nonzero() {
        let mut m = Mask::new(4, 2);
        assert_eq!(m.count_fg(), 0);
        m.set(1, 3, FOREGROUND);
        m.set(0, 0, FOREGROUND);
        assert_eq!(m.count_fg(), 2);
    }
}
