use super::*;
use crate::raster::mask::FOREGROUND;
use std::collections::BTreeSet;

fn mask_from_pixels(w: usize, h: usize, pixels: &[(usize, usize)]) -> Mask {
    let mut m = Mask::new(w, h);
    for &(row, col) in pixels {
        m.set(row, col, FOREGROUND);
    }
    m
}

/// A plus shape: horizontal and vertical 1-px bars crossing at (10, 10).
fn plus_mask() -> Mask {
    let mut pixels = Vec::new();
    for col in 4..=16 {
        pixels.push((10, col));
    }
    for row in 4..=16 {
        pixels.push((row, 10));
    }
    mask_from_pixels(21, 21, &pixels)
}

fn assert_chain_connected(chain: &[Pixel]) {
    for pair in chain.windows(2) {
        let dr = (pair[0].row as i64 - pair[1].row as i64).abs();
        let dc = (pair[0].col as i64 - pair[1].col as i64).abs();
        assert!(
            dr <= 1 && dc <= 1,
            "chain breaks between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn straight_line_becomes_one_ordered_segment() {
    let skel = mask_from_pixels(20, 5, &(3..17).map(|c| (2, c)).collect::<Vec<_>>());
    let (_, initial) = label_initial_segments(&skel);
    let (table, labels) = rebuild_ordered(&initial);

    assert_eq!(table.len(), 1);
    let (_, chain) = table.iter().next().unwrap();
    assert_eq!(chain.len(), 14);
    assert_chain_connected(chain);
    // Ordered walk: columns strictly monotonic in one direction.
    let cols: Vec<u32> = chain.iter().map(|p| p.col).collect();
    let ascending: Vec<u32> = (3..17).collect();
    let descending: Vec<u32> = (3..17).rev().collect();
    assert!(cols == ascending || cols == descending, "chain not ordered: {cols:?}");
    assert_eq!(labels.labeled_pixels().len(), 14);
}

#[test]
fn plus_shape_splits_into_four_arms() {
    let skel = plus_mask();
    let (_, initial) = label_initial_segments(&skel);
    // The crossing pixel bounds the discovery fill, so it stays attached to
    // exactly one arm and the other three stop short of it.
    let assigned = assign_junction_pixels(&skel, &initial);
    let (table, labels) = rebuild_ordered(&assigned);

    assert_eq!(table.len(), 4, "expected four junction-bounded arms");
    for (id, chain) in table.iter() {
        assert!(chain.len() >= MIN_SEGMENT_PIXELS);
        assert_chain_connected(chain);
        for p in chain {
            assert_eq!(labels.road_at(p.row as usize, p.col as usize), Some(id));
        }
    }
    // Every skeleton pixel ends up labeled; none is lost at the crossing.
    assert_eq!(labels.labeled_pixels().len(), skel.count_fg());
}

#[test]
fn rebuilt_segments_partition_the_labeled_pixels() {
    let skel = plus_mask();
    let (_, initial) = label_initial_segments(&skel);
    let assigned = assign_junction_pixels(&skel, &initial);
    let (table, labels) = rebuild_ordered(&assigned);

    let mut seen = BTreeSet::new();
    for (_, chain) in table.iter() {
        for p in chain {
            assert!(seen.insert((p.row, p.col)), "pixel {p:?} in two segments");
        }
    }
    let labeled: BTreeSet<(u32, u32)> = labels
        .labeled_pixels()
        .into_iter()
        .map(|p| (p.row, p.col))
        .collect();
    assert_eq!(seen, labeled);
}

#[test]
fn tiny_segments_are_dropped_as_noise() {
    // Two isolated specks plus one real line.
    let mut pixels: Vec<(usize, usize)> = (2..12).map(|c| (5, c)).collect();
    pixels.push((0, 0));
    pixels.extend([(9, 0), (9, 1)]);
    let skel = mask_from_pixels(15, 11, &pixels);

    let (_, initial) = label_initial_segments(&skel);
    let (table, labels) = rebuild_ordered(&initial);

    assert_eq!(table.len(), 1);
    assert!(!labels.is_labeled(0, 0));
    assert!(!labels.is_labeled(9, 0));
    assert_eq!(labels.labeled_pixels().len(), 10);
}

#[test]
fn junction_adoption_prefers_orthogonal_neighbors() {
    // Unlabeled pixel at (5, 5) flanked by a diagonal neighbor from road 1
    // and an orthogonal neighbor from road 2: the orthogonal one wins.
    let mut skel = Mask::new(10, 10);
    skel.set(4, 4, FOREGROUND);
    skel.set(5, 6, FOREGROUND);
    skel.set(5, 5, FOREGROUND);
    let mut labels = LabelRaster::new(10, 10);
    labels.set(4, 4, crate::types::RoadId(1));
    labels.set(5, 6, crate::types::RoadId(2));

    let assigned = assign_junction_pixels(&skel, &labels);
    assert_eq!(assigned.road_at(5, 5), Some(crate::types::RoadId(2)));
}
