use itertools::Itertools;
use log::error;

use crate::entities::Item;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::{BinSize, Rectangle};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// All rectangles lie inside the bin and no pair of them overlaps
pub fn layout_is_valid(packed: &[Rectangle], bin: &BinSize) -> bool {
    if let Some(r) = packed.iter().find(|r| !r.is_within(bin)) {
        error!("rectangle of item {} at {} exceeds the bin", r.item_id, r);
        return false;
    }
    if let Some((a, b)) = packed
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.collides_with(*b))
    {
        error!(
            "rectangles of items {} at {} and {} at {} overlap",
            a.item_id, a, b.item_id, b
        );
        return false;
    }
    true
}

/// Every item of the set appears exactly once among `packed` and `unplaced`
pub fn attempt_is_complete(packed: &[Rectangle], unplaced: &[Rectangle], n_items: usize) -> bool {
    let ids = packed
        .iter()
        .chain(unplaced.iter())
        .map(|r| r.item_id)
        .sorted()
        .collect_vec();
    ids.len() == n_items && ids.iter().enumerate().all(|(i, id)| i == *id)
}
