//! Genetic algorithm configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Parameters of a genetic algorithm run.
///
/// Each generation breeds `2 * hybridization_size` children and
/// `mutation_size` mutants from the `population_size` parents, then keeps the
/// `population_size` cheapest tours of the whole working set.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_hybridization_size(20)
///     .with_mutation_size(10)
///     .with_generations(200)
///     .with_seed(42);
/// assert_eq!(config.working_set_size(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of surviving parents per generation.
    pub population_size: usize,
    /// Crossovers per generation; each produces two children.
    pub hybridization_size: usize,
    /// Mutants per generation.
    pub mutation_size: usize,
    /// Number of generations to run.
    pub generations: usize,
    /// Seed for [`GeneticSolver::solve_seeded`](super::GeneticSolver::solve_seeded).
    pub seed: Option<u64>,
    /// Wall-clock limit; the best tour so far is returned when it expires.
    pub time_limit: Option<Duration>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            hybridization_size: 150,
            mutation_size: 20,
            generations: 1000,
            seed: None,
            time_limit: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of surviving parents.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of crossovers per generation.
    pub fn with_hybridization_size(mut self, size: usize) -> Self {
        self.hybridization_size = size;
        self
    }

    /// Sets the number of mutants per generation.
    pub fn with_mutation_size(mut self, size: usize) -> Self {
        self.mutation_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Parents plus every offspring slot.
    pub fn working_set_size(&self) -> usize {
        self.population_size + 2 * self.hybridization_size + self.mutation_size
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::invalid_input("population size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 500);
        assert_eq!(config.working_set_size(), 500 + 300 + 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_population_rejected() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(TspError::InvalidInput(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GaConfig::default()
            .with_generations(7)
            .with_seed(3)
            .with_time_limit(Duration::from_millis(250));
        let json = serde_json::to_string(&config).expect("serialize");
        let back: GaConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
