use antpack::entities::{Instance, Layout};
use antpack::fitness::fitness;
use antpack::geometry::Rectangle;
use antpack::util::assertions::{attempt_is_complete, layout_is_valid};
use itertools::Itertools;
use log::trace;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::SmallRng;

use crate::config::AcoConfig;
use crate::opt::heuristic::HeuristicVector;
use crate::opt::pheromone::PheromoneTrail;
use crate::opt::solution::AntSolution;

/// Read-only state shared by all ants of an iteration
#[derive(Clone, Copy)]
pub struct Colony<'a> {
    pub instance: &'a Instance,
    pub pheromones: &'a PheromoneTrail,
    pub heuristics: &'a HeuristicVector,
    pub config: &'a AcoConfig,
}

/// Constructs a single packing by repeatedly drawing an unpacked item, weighted by pheromone and heuristic,
/// and placing it bottom-left-first.
pub struct Ant<'a> {
    colony: Colony<'a>,
    /// Each ant owns its PRNG, seeded independently by the optimizer
    rng: SmallRng,
}

impl<'a> Ant<'a> {
    pub fn new(colony: Colony<'a>, rng: SmallRng) -> Self {
        Self { colony, rng }
    }

    pub fn run(mut self) -> AntSolution {
        let instance = self.colony.instance;

        let mut remaining = (0..instance.items.len()).collect_vec();
        let mut layout = Layout::new(instance.bin);
        let mut unplaced = vec![];

        while !remaining.is_empty() {
            let idx = self.select(&remaining);
            let item = instance.items.item(remaining.remove(idx));

            match layout.try_place(Rectangle::from_item(item)) {
                Some(placed) => trace!("[ANT] item {} placed at {}", item.id, placed),
                None => {
                    trace!("[ANT] item {} does not fit", item.id);
                    unplaced.push(Rectangle::from_item(item));
                }
            }
        }

        let packed = layout.into_packed();
        debug_assert!(layout_is_valid(&packed, &instance.bin));
        debug_assert!(attempt_is_complete(
            &packed,
            &unplaced,
            instance.items.len()
        ));

        let fitness = fitness(&packed, &unplaced, &instance.bin);
        AntSolution {
            packed,
            unplaced,
            fitness,
        }
    }

    /// Draws an index into `remaining` with probability proportional to `pheromone^alpha * heuristic^beta`.
    /// Falls back to a uniform draw when no item carries a positive weight.
    fn select(&mut self, remaining: &[usize]) -> usize {
        let weights = remaining
            .iter()
            .map(|&id| self.weight(id))
            .collect_vec();

        let total = weights.iter().sum::<f64>();
        let distr = match total > 0.0 && total.is_finite() {
            true => WeightedIndex::new(&weights).ok(),
            false => None,
        };

        match distr {
            Some(distr) => distr.sample(&mut self.rng),
            None => self.rng.random_range(0..remaining.len()),
        }
    }

    fn weight(&self, item_id: usize) -> f64 {
        let Colony {
            pheromones,
            heuristics,
            config,
            ..
        } = self.colony;
        let tau = pheromones.get(item_id).max(0.0).powf(config.alpha);
        let eta = heuristics.relative(item_id).powf(config.beta);
        (tau * eta).max(0.0)
    }
}
