use std::time::Instant;

use anyhow::{Result, ensure};
use antpack::entities::Instance;
use antpack::geometry::geo_traits::Shape;
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::AcoConfig;
use crate::opt::ant::{Ant, Colony};
use crate::opt::heuristic::HeuristicVector;
use crate::opt::pheromone::PheromoneTrail;
use crate::opt::solution::{AcoSolution, AntSolution};

/// Called whenever an ant finds a strictly better solution than the best so far, with the iteration it was found in
pub type ImprovementCallback = Box<dyn FnMut(usize, &AntSolution) + Send>;

/// Ant Colony Optimization for packing rectangles into a single bin.
///
/// Every iteration launches a batch of ants which construct packings independently, guided by the shared
/// pheromone trail and the static heuristic. Once all ants of the batch are done, the trail is updated with the full batch.
pub struct AcoOptimizer {
    pub instance: Instance,
    pub config: AcoConfig,
    /// Master PRNG, only used to seed the ants
    pub rng: SmallRng,
    pub pheromones: PheromoneTrail,
    pub heuristics: HeuristicVector,
    improvement_callback: Option<ImprovementCallback>,
}

impl AcoOptimizer {
    pub fn new(instance: Instance, config: AcoConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        ensure!(
            !instance.items.is_empty(),
            "instance {} should contain at least one item",
            instance.name
        );
        let pheromones = PheromoneTrail::new(instance.items.len());
        let heuristics = HeuristicVector::new(&instance.items, config.heuristic_power);
        Ok(Self {
            instance,
            config,
            rng,
            pheromones,
            heuristics,
            improvement_callback: None,
        })
    }

    pub fn with_improvement_callback(mut self, callback: ImprovementCallback) -> Self {
        self.improvement_callback = Some(callback);
        self
    }

    /// Number of ants launched per iteration
    pub fn n_ants(&self) -> usize {
        self.config.n_ants.unwrap_or(self.instance.items.len())
    }

    pub fn solve(&mut self) -> AcoSolution {
        let start = Instant::now();
        let n_ants = self.n_ants();
        let mut best: Option<(AntSolution, usize)> = None;

        for iteration in 0..self.config.n_iterations {
            //seeds are drawn up front, so the outcome does not depend on thread scheduling
            let seeds = (0..n_ants).map(|_| self.rng.random::<u64>()).collect_vec();
            let solutions = self.run_ants(&seeds);

            for (ant_idx, sol) in solutions.iter().enumerate() {
                debug!(
                    "[ACO] iteration {iteration}, ant {ant_idx}: fitness {}, {} packed, {} unplaced",
                    sol.fitness,
                    sol.packed.len(),
                    sol.unplaced.len()
                );
                if best.as_ref().is_none_or(|(b, _)| sol.fitness < b.fitness) {
                    info!(
                        "[ACO] new best solution with fitness {} ({} items packed) in iteration {}",
                        sol.fitness,
                        sol.packed.len(),
                        iteration + 1
                    );
                    if let Some(callback) = self.improvement_callback.as_mut() {
                        callback(iteration, sol);
                    }
                    best = Some((sol.clone(), iteration));
                }
            }

            if let Some(it_best) = solutions.iter().min_by_key(|s| OrderedFloat(s.fitness)) {
                info!(
                    "[ACO] iteration {}/{}: best {}, overall best {}",
                    iteration + 1,
                    self.config.n_iterations,
                    it_best.fitness,
                    best.as_ref().map_or(f64::INFINITY, |(b, _)| b.fitness)
                );
            }

            self.pheromones.decay_and_reinforce(
                &solutions,
                self.config.decay,
                self.config.zero_fitness_epsilon,
            );
        }

        let n_ant_runs = n_ants * self.config.n_iterations;
        let (best, iteration_found) =
            best.expect("a validated config and a non-empty instance perform at least one ant run");

        info!(
            "[ACO] optimization finished in {:.3}ms ({} ant runs)",
            start.elapsed().as_secs_f64() * 1000.0,
            n_ant_runs.separate_with_commas()
        );

        let density = best.packed.iter().map(|r| r.area()).sum::<u64>() as f64
            / self.instance.bin.area() as f64;

        info!(
            "[ACO] solution packs {}/{} items with a density of {:.3}% (fitness {})",
            best.packed.len(),
            self.instance.items.len(),
            density * 100.0,
            best.fitness
        );

        AcoSolution {
            packed: best.packed,
            unplaced: best.unplaced,
            fitness: best.fitness,
            density,
            iteration_found,
            n_ant_runs,
            time_stamp: Instant::now(),
        }
    }

    /// Runs one ant per seed and returns their solutions in seed order
    fn run_ants(&self, seeds: &[u64]) -> Vec<AntSolution> {
        let colony = Colony {
            instance: &self.instance,
            pheromones: &self.pheromones,
            heuristics: &self.heuristics,
            config: &self.config,
        };
        let run = |seed: &u64| Ant::new(colony, SmallRng::seed_from_u64(*seed)).run();

        match self.config.parallel {
            true => seeds.par_iter().map(run).collect(),
            false => seeds.iter().map(run).collect(),
        }
    }
}
