use std::time::Instant;

use antpack::geometry::Rectangle;

/// Outcome of a single ant run. Immutable once returned to the optimizer.
#[derive(Clone, Debug)]
pub struct AntSolution {
    /// Placed rectangles, in placement order
    pub packed: Vec<Rectangle>,
    /// Rectangles for which no position was found, in their original orientation
    pub unplaced: Vec<Rectangle>,
    /// Lower is better, see [`antpack::fitness::fitness`]
    pub fitness: f64,
}

/// Best packing found over all iterations of an optimization run
#[derive(Clone, Debug)]
pub struct AcoSolution {
    pub packed: Vec<Rectangle>,
    pub unplaced: Vec<Rectangle>,
    pub fitness: f64,
    /// Packed area divided by the bin area
    pub density: f64,
    /// Iteration (zero-based) in which this solution was first found
    pub iteration_found: usize,
    /// Total number of ant runs performed
    pub n_ant_runs: usize,
    /// Moment the optimization finished
    pub time_stamp: Instant,
}

impl AcoSolution {
    /// The packed rectangles as `(x, y, width, height)` tuples
    pub fn packed_tuples(&self) -> Vec<(u32, u32, u32, u32)> {
        self.packed.iter().map(|r| r.as_tuple()).collect()
    }
}
