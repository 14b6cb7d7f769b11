use serde::{Deserialize, Serialize};

/// Rectangle packing instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The bin in which the items are packed
    pub bin: ExtBin,
    /// Set of items to be packed
    pub items: Vec<ExtItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtBin {
    pub width: u32,
    pub height: u32,
}

/// Item with a demand
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtItem {
    pub width: u32,
    pub height: u32,
    /// Amount of copies of this item to be packed
    #[serde(default = "default_demand")]
    pub demand: u64,
}

fn default_demand() -> u64 {
    1
}

/// A rectangle as placed in a solution
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtRect {
    /// Index of the item in the canonical (area-descending) order
    pub item_id: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
}

/// Packing solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Unused bin area plus the area of all unplaced items
    pub fitness: f64,
    /// Sum of the area of the packed items divided by the area of the bin
    pub density: f64,
    /// Packed rectangles in placement order
    pub packed: Vec<ExtRect>,
    /// Rectangles which could not be placed
    pub unplaced: Vec<ExtRect>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}
