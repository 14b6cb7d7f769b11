use antpack::entities::Instance;
use antpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::AcoConfig;
use crate::opt::solution::AcoSolution;

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct AcoOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    /// Iteration (one-based) in which the solution was found
    pub iteration_found: usize,
    pub n_ant_runs: usize,
    pub config: AcoConfig,
}

impl AcoOutput {
    pub fn new(instance: &Instance, solution: &AcoSolution, config: AcoConfig) -> Self {
        Self {
            instance: antpack::io::export_instance(instance),
            solution: antpack::io::export(
                instance,
                &solution.packed,
                &solution.unplaced,
                solution.time_stamp,
                *crate::EPOCH,
            ),
            iteration_found: solution.iteration_found + 1,
            n_ant_runs: solution.n_ant_runs,
            config,
        }
    }
}
