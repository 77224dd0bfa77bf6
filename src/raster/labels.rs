//! Pixel → road-id label raster.
//!
//! Stores the raw `u32` of a [`RoadId`](crate::types::RoadId) per pixel, with
//! `0` meaning unlabeled. The raster is kept mutually consistent with the
//! segment table: same segment ⇔ same id, nothing else carries identity.

use crate::types::{Pixel, RoadId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRaster {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    data: Vec<u32>,
}

impl LabelRaster {
    /// Construct an all-unlabeled raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }

    /// Owning road at (row, col), or `None` for unlabeled pixels.
    #[inline]
    pub fn road_at(&self, row: usize, col: usize) -> Option<RoadId> {
        match self.data[self.idx(row, col)] {
            0 => None,
            id => Some(RoadId(id)),
        }
    }

    /// Signed-coordinate lookup; out-of-bounds reads as unlabeled.
    #[inline]
    pub fn road_at_signed(&self, row: isize, col: isize) -> Option<RoadId> {
        if row < 0 || col < 0 || row >= self.h as isize || col >= self.w as isize {
            return None;
        }
        self.road_at(row as usize, col as usize)
    }

    #[inline]
    pub fn is_labeled(&self, row: usize, col: usize) -> bool {
        self.data[self.idx(row, col)] != 0
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, id: RoadId) {
        let i = self.idx(row, col);
        self.data[i] = id.0;
    }

    #[inline]
    pub fn paint(&mut self, pixel: Pixel, id: RoadId) {
        self.set(pixel.row as usize, pixel.col as usize, id);
    }

    /// All labeled pixels, in scan order.
    pub fn labeled_pixels(&self) -> Vec<Pixel> {
        let mut out = Vec::new();
        for row in 0..self.h {
            for col in 0..self.w {
                if self.is_labeled(row, col) {
                    out.push(Pixel::new(row as u32, col as u32));
                }
            }
        }
        out
    }
}
