pub mod aco_optimizer;
pub mod ant;
pub mod heuristic;
pub mod pheromone;
pub mod solution;
