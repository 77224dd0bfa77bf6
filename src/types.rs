use serde::{Deserialize, Serialize};

/// Identifier of a road segment in the segment table.
///
/// Ids are allocated monotonically starting at 1; id 0 is reserved for
/// background in the label raster. Identity is always the id — the color a
/// segment is drawn with exists only for visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadId(pub u32);

impl RoadId {
    /// Raster value marking a pixel that belongs to no road.
    pub const BACKGROUND: RoadId = RoadId(0);
}

/// Integer pixel coordinate in (row, col) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub row: u32,
    pub col: u32,
}

impl Pixel {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance between two pixel centres.
    #[inline]
    pub fn dist(&self, other: &Pixel) -> f32 {
        let dr = self.row as f32 - other.row as f32;
        let dc = self.col as f32 - other.col as f32;
        (dr * dr + dc * dc).sqrt()
    }
}
