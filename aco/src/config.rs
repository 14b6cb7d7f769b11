use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration for the ACO optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AcoConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of iterations, each consisting of a batch of ant runs followed by one pheromone update
    pub n_iterations: usize,
    /// Number of ants per iteration. If undefined, one ant is launched per item
    pub n_ants: Option<usize>,
    /// Factor by which all pheromones are multiplied at the end of every iteration
    pub decay: f64,
    /// Exponent of the pheromone term in the selection weight
    pub alpha: f64,
    /// Exponent of the heuristic term in the selection weight
    pub beta: f64,
    /// The heuristic of an item is its area raised to this power
    pub heuristic_power: i32,
    /// Replaces a fitness of zero when reinforcing pheromones
    pub zero_fitness_epsilon: f64,
    /// Run the ants of an iteration concurrently
    pub parallel: bool,
    /// Parameters for generating a random instance when no instance file is provided
    #[serde(default)]
    pub instance_gen: InstanceGenConfig,
}

impl AcoConfig {
    /// Fails on any parameter which would make the optimization meaningless
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_iterations > 0, "n_iterations should be positive");
        ensure!(
            self.n_ants != Some(0),
            "n_ants should be positive when defined"
        );
        ensure!(
            self.decay > 0.0 && self.decay <= 1.0,
            "decay should be in (0, 1], got {}",
            self.decay
        );
        ensure!(
            self.alpha.is_finite() && self.alpha >= 0.0,
            "alpha should be a non-negative number, got {}",
            self.alpha
        );
        ensure!(
            self.beta.is_finite() && self.beta >= 0.0,
            "beta should be a non-negative number, got {}",
            self.beta
        );
        ensure!(
            self.heuristic_power >= 0,
            "heuristic_power should be non-negative, got {}",
            self.heuristic_power
        );
        ensure!(
            self.zero_fitness_epsilon > 0.0,
            "zero_fitness_epsilon should be positive, got {}",
            self.zero_fitness_epsilon
        );
        Ok(())
    }
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_iterations: 10,
            n_ants: None,
            decay: 0.8,
            alpha: 1.0,
            beta: 2.0,
            heuristic_power: 4,
            zero_fitness_epsilon: 1e-6,
            parallel: true,
            instance_gen: InstanceGenConfig::default(),
        }
    }
}

/// Bounds for generating random instances. All bounds are inclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct InstanceGenConfig {
    pub n_items: usize,
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub bin_width: u32,
    pub bin_height: u32,
}

impl InstanceGenConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_items > 0, "n_items should be positive");
        ensure!(
            self.min_width > 0 && self.min_height > 0,
            "rectangle dimensions should be strictly positive, got min {}x{}",
            self.min_width,
            self.min_height
        );
        ensure!(
            self.min_width <= self.max_width,
            "min_width ({}) exceeds max_width ({})",
            self.min_width,
            self.max_width
        );
        ensure!(
            self.min_height <= self.max_height,
            "min_height ({}) exceeds max_height ({})",
            self.min_height,
            self.max_height
        );
        ensure!(
            self.bin_width > 0 && self.bin_height > 0,
            "bin dimensions should be strictly positive, got {}x{}",
            self.bin_width,
            self.bin_height
        );
        Ok(())
    }
}

impl Default for InstanceGenConfig {
    fn default() -> Self {
        Self {
            n_items: 65,
            min_width: 1,
            max_width: 4,
            min_height: 1,
            max_height: 4,
            bin_width: 21,
            bin_height: 21,
        }
    }
}
