//! Genetic algorithm for the travelling salesman problem.
//!
//! - [`GaConfig`] — Population, offspring, and generation counts
//! - [`hybridize`], [`mutate`] — Permutation-preserving crossover and mutation
//! - [`Population`] — Parents plus offspring slots, truncation selection
//! - [`GeneticSolver`] — The generational loop

mod config;
mod operators;
mod population;
mod solver;

pub use config::GaConfig;
pub use operators::{hybridize, mutate, random_permutation, MutationKind};
pub use population::Population;
pub use solver::{genetic, GeneticSolver};
