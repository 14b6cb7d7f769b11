use std::cmp::Reverse;

use itertools::Itertools;

use crate::entities::Item;
use crate::geometry::geo_traits::Shape;
use crate::util::assertions::item_ids_correct;

/// The fixed, ordered sequence of items to pack.
///
/// Items are sorted once by descending area (stable for equal areas) and receive their index as id.
/// This ordering is the index space for every per-item vector (pheromones, heuristics) and never changes afterwards.
#[derive(Clone, Debug)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Creates an item set from `(width, height)` pairs in input order
    pub fn new(dimensions: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let items = dimensions
            .into_iter()
            .sorted_by_key(|&(w, h)| Reverse(w as u64 * h as u64))
            .enumerate()
            .map(|(id, (width, height))| Item { id, width, height })
            .collect_vec();

        debug_assert!(item_ids_correct(&items));

        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the areas of all items
    pub fn total_area(&self) -> u64 {
        self.items.iter().map(|i| i.area()).sum()
    }
}
