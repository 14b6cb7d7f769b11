use antpack::entities::ItemSet;
use antpack::geometry::geo_traits::Shape;
use itertools::Itertools;

/// Static desirability of every item, indexed by item id: its area raised to a fixed power.
/// Computed once and never modified.
#[derive(Clone, Debug)]
pub struct HeuristicVector {
    values: Vec<f64>,
    /// `values` divided by their maximum
    relative: Vec<f64>,
}

impl HeuristicVector {
    pub fn new(items: &ItemSet, power: i32) -> Self {
        let areas = items
            .items()
            .iter()
            .map(|item| item.area() as f64)
            .collect_vec();
        let max_area = areas.iter().copied().fold(0.0, f64::max);

        let values = areas.iter().map(|a| a.powi(power)).collect_vec();
        //computed from the area ratio, so it stays finite where `values` overflows
        let relative = areas
            .iter()
            .map(|a| match max_area > 0.0 {
                true => (a / max_area).powi(power),
                false => 1.0,
            })
            .collect_vec();

        Self { values, relative }
    }

    pub fn get(&self, item_id: usize) -> f64 {
        self.values[item_id]
    }

    /// Heuristic value of the item divided by the largest heuristic value in the vector.
    /// Selection weights built from this differ from the raw ones only by a constant factor.
    pub fn relative(&self, item_id: usize) -> f64 {
        self.relative[item_id]
    }
}
