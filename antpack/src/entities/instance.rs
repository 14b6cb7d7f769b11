use crate::entities::ItemSet;
use crate::geometry::BinSize;
use crate::geometry::geo_traits::Shape;

/// A rectangle packing problem: an ordered set of items and the single bin to pack them in.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub items: ItemSet,
    pub bin: BinSize,
}

impl Instance {
    pub fn new(name: impl Into<String>, items: ItemSet, bin: BinSize) -> Self {
        Self {
            name: name.into(),
            items,
            bin,
        }
    }

    /// Lower bound on the fitness of any packing: zero if the items can cover the bin, otherwise the uncovered area
    pub fn fitness_lower_bound(&self) -> f64 {
        self.bin.area().saturating_sub(self.items.total_area()) as f64
    }
}
