//! Shared table of road segments keyed by id.
//!
//! Replaces a fixed-size road array with an owned map: ids are allocated
//! monotonically and never reused, and removing a segment erases its entry
//! rather than leaving a tombstone.

use crate::types::{Pixel, RoadId};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct SegmentTable {
    roads: BTreeMap<RoadId, Vec<Pixel>>,
    next_id: u32,
}

impl Default for SegmentTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentTable {
    pub fn new() -> Self {
        Self {
            roads: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store a new segment and return its freshly allocated id.
    pub fn insert(&mut self, pixels: Vec<Pixel>) -> RoadId {
        let id = RoadId(self.next_id);
        self.next_id += 1;
        self.roads.insert(id, pixels);
        id
    }

    pub fn pixels(&self, id: RoadId) -> Option<&Vec<Pixel>> {
        self.roads.get(&id)
    }

    pub fn pixels_mut(&mut self, id: RoadId) -> Option<&mut Vec<Pixel>> {
        self.roads.get_mut(&id)
    }

    /// Erase a segment, returning its pixel chain.
    pub fn remove(&mut self, id: RoadId) -> Option<Vec<Pixel>> {
        self.roads.remove(&id)
    }

    pub fn contains(&self, id: RoadId) -> bool {
        self.roads.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoadId, &Vec<Pixel>)> {
        self.roads.iter().map(|(&id, pixels)| (id, pixels))
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut table = SegmentTable::new();
        let a = table.insert(vec![Pixel::new(0, 0)]);
        let b = table.insert(vec![Pixel::new(1, 1)]);
        assert_ne!(a, b);
        table.remove(a);
        let c = table.insert(vec![Pixel::new(2, 2)]);
        assert_ne!(c, a);
        assert!(!table.contains(a));
        assert_eq!(table.len(), 2);
    }
}
