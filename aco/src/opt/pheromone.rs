use log::debug;

use crate::opt::solution::AntSolution;

/// Learned preference for every item, indexed by item id.
///
/// Read by all ants of an iteration and written only by the optimizer in between iterations.
#[derive(Clone, Debug)]
pub struct PheromoneTrail {
    values: Vec<f64>,
}

impl PheromoneTrail {
    pub const INITIAL_VALUE: f64 = 1.0;

    pub fn new(n_items: usize) -> Self {
        Self {
            values: vec![Self::INITIAL_VALUE; n_items],
        }
    }

    /// Trail with the given pheromone level per item id
    pub fn from_values(values: Vec<f64>) -> Self {
        debug_assert!(values.iter().all(|v| *v >= 0.0));
        Self { values }
    }

    pub fn get(&self, item_id: usize) -> f64 {
        self.values[item_id]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Evaporates all pheromones by `decay`, then lets every solution of the iteration deposit `1 / fitness`
    /// on each item it managed to pack. A fitness of zero is replaced by `epsilon`.
    pub fn decay_and_reinforce(&mut self, solutions: &[AntSolution], decay: f64, epsilon: f64) {
        self.values.iter_mut().for_each(|v| *v *= decay);

        for sol in solutions {
            let fitness = match sol.fitness == 0.0 {
                true => epsilon,
                false => sol.fitness,
            };
            let deposit = 1.0 / fitness;
            for rect in &sol.packed {
                self.values[rect.item_id] += deposit;
            }
        }

        debug_assert!(self.values.iter().all(|v| *v >= 0.0));
        debug!(
            "[ACO] pheromones updated with {} solutions, max: {:.6}",
            solutions.len(),
            self.values.iter().copied().fold(0.0, f64::max)
        );
    }
}
