use log::trace;

use crate::geometry::geo_traits::Shape;
use crate::geometry::{BinSize, Rectangle};
use crate::placement::find_position;

/// A bin together with the rectangles packed into it so far, in placement order.
#[derive(Clone, Debug)]
pub struct Layout {
    pub bin: BinSize,
    packed: Vec<Rectangle>,
}

impl Layout {
    pub fn new(bin: BinSize) -> Self {
        Self {
            bin,
            packed: vec![],
        }
    }

    /// Searches a bottom-left position for `candidate` and, if one exists, fixes it there and appends it.
    /// Returns the placed rectangle (possibly rotated), or `None` if it does not fit in either orientation.
    pub fn try_place(&mut self, mut candidate: Rectangle) -> Option<&Rectangle> {
        let (x, y) = find_position(&self.packed, &mut candidate, &self.bin)?;
        let placed = candidate.at(x, y);
        trace!("placed item {} at {}", placed.item_id, placed);
        self.packed.push(placed);
        self.packed.last()
    }

    pub fn packed(&self) -> &[Rectangle] {
        &self.packed
    }

    pub fn into_packed(self) -> Vec<Rectangle> {
        self.packed
    }

    pub fn packed_area(&self) -> u64 {
        self.packed.iter().map(|r| r.area()).sum()
    }

    /// Fraction of the bin covered by packed rectangles
    pub fn density(&self) -> f64 {
        self.packed_area() as f64 / self.bin.area() as f64
    }
}
