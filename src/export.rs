//! Final road-graph export schema.
//!
//! The on-disk format is the caller's business (the CLI writes JSON via
//! `raster::io::write_json_file`); this module only fixes the logical
//! schema: road id → ordered pixel chain, pixel → owning road id, and the
//! source raster dimensions.

use crate::labeling::SegmentTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// Source raster dimensions, after any external resize.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RoadGraphMeta {
    pub width: usize,
    pub height: usize,
}

/// The exported road graph.
#[derive(Clone, Debug, Serialize)]
pub struct RoadGraph {
    /// Road id → ordered `[row, col, 0]` triples. The trailing 0 is a
    /// reserved field kept for compatibility with existing consumers.
    pub roads: BTreeMap<String, Vec<[u32; 3]>>,
    /// `"(row, col)"` → owning road id, covering every pixel of every road.
    pub pixel_index: BTreeMap<String, u32>,
    pub meta: RoadGraphMeta,
}

/// Build the export schema from the final segment table.
///
/// A pixel outside the raster bounds is a data-integrity defect introduced
/// by an earlier stage; it fails the export loudly rather than being
/// silently dropped.
pub fn export_road_graph(
    table: &SegmentTable,
    width: usize,
    height: usize,
) -> Result<RoadGraph, String> {
    let mut roads = BTreeMap::new();
    let mut pixel_index = BTreeMap::new();

    for (id, pixels) in table.iter() {
        if pixels.is_empty() {
            continue;
        }
        let mut triples = Vec::with_capacity(pixels.len());
        for p in pixels {
            if p.row as usize >= height || p.col as usize >= width {
                return Err(format!(
                    "road {} contains out-of-bounds pixel ({}, {}) in a {width}×{height} raster; \
                     labeling or merging produced an invalid chain",
                    id.0, p.row, p.col
                ));
            }
            triples.push([p.row, p.col, 0]);
            pixel_index.insert(format!("({}, {})", p.row, p.col), id.0);
        }
        roads.insert(id.0.to_string(), triples);
    }

    Ok(RoadGraph {
        roads,
        pixel_index,
        meta: RoadGraphMeta { width, height },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pixel;

    #[test]
    fn schema_covers_every_pixel() {
        let mut table = SegmentTable::new();
        let id = table.insert(vec![
            Pixel::new(1, 2),
            Pixel::new(1, 3),
            Pixel::new(2, 4),
        ]);

        let graph = export_road_graph(&table, 10, 10).unwrap();
        assert_eq!(graph.roads.len(), 1);
        let chain = &graph.roads[&id.0.to_string()];
        assert_eq!(chain.as_slice(), &[[1, 2, 0], [1, 3, 0], [2, 4, 0]]);
        assert_eq!(graph.pixel_index["(1, 2)"], id.0);
        assert_eq!(graph.pixel_index["(2, 4)"], id.0);
        assert_eq!(graph.pixel_index.len(), 3);
        assert_eq!(graph.meta.width, 10);
        assert_eq!(graph.meta.height, 10);
    }

    #[test]
    fn out_of_bounds_pixel_fails_the_export() {
        let mut table = SegmentTable::new();
        table.insert(vec![Pixel::new(1, 2), Pixel::new(1, 3), Pixel::new(1, 10)]);
        let err = export_road_graph(&table, 10, 10).unwrap_err();
        assert!(err.contains("(1, 10)"), "unexpected error: {err}");
    }
}
