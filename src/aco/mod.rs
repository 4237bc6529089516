//! Ant colony optimization for the travelling salesman problem.
//!
//! - [`AcoConfig`] — Ant budget, evaporation, reinforcement cadence, stall limit
//! - [`PheromoneMatrix`], [`DesirabilityMatrix`] — Per-edge trail and bias
//! - [`roulette_select`] — Cumulative-probability vertex selection
//! - [`AntColonySolver`] — The ant-by-ant loop
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L. M. (1997). "Ant colony system: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Transactions
//! on Evolutionary Computation* 1(1), 53-66.

mod ant;
mod config;
mod solver;
mod trails;

pub use ant::{roulette_select, Ant};
pub use config::AcoConfig;
pub use solver::{ant_colony, AntColonySolver};
pub use trails::{DesirabilityMatrix, PheromoneMatrix, PHEROMONE_FLOOR};
