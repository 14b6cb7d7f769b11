use crate::geometry::geo_traits::Shape;
use crate::geometry::{BinSize, Rectangle};

/// Fitness of a packing attempt: the unused bin area plus the full area of every rectangle left out.
///
/// Lower is better. Zero only when the packed rectangles exactly tile the bin and nothing is unplaced.
pub fn fitness(packed: &[Rectangle], unplaced: &[Rectangle], bin: &BinSize) -> f64 {
    let packed_area: u64 = packed.iter().map(|r| r.area()).sum();
    let unplaced_area: u64 = unplaced.iter().map(|r| r.area()).sum();
    let waste = bin.area().saturating_sub(packed_area);
    (waste + unplaced_area) as f64
}
