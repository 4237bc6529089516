//! Ant colony configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Parameters of an ant colony run.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(5_000)
///     .with_evaporation_rate(0.8)
///     .with_seed(1);
/// assert_eq!(config.stall_limit(150), 1_500_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Number of ants dispatched, one after another.
    pub num_ants: usize,
    /// Factor every pheromone value is multiplied by after each ant, in `(0, 1)`.
    pub evaporation_rate: f64,
    /// Every this many ants, the incumbent best tour is reinforced instead of
    /// the ant's own path. `None` makes every ant reinforce its own path.
    pub reinforce_best_every: Option<usize>,
    /// The run stops once `stall_factor * n` consecutive ants fail to improve.
    pub stall_factor: usize,
    /// Seed for [`AntColonySolver::solve_seeded`](super::AntColonySolver::solve_seeded).
    pub seed: Option<u64>,
    /// Wall-clock limit; the best tour so far is returned when it expires.
    pub time_limit: Option<Duration>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10_000,
            evaporation_rate: 0.8,
            reinforce_best_every: Some(100),
            stall_factor: 10_000,
            seed: None,
            time_limit: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the evaporation factor.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the best-tour reinforcement cadence (`None` disables it).
    pub fn with_reinforce_best_every(mut self, every: Option<usize>) -> Self {
        self.reinforce_best_every = every;
        self
    }

    /// Sets the stall factor.
    pub fn with_stall_factor(mut self, factor: usize) -> Self {
        self.stall_factor = factor;
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

    /// Consecutive non-improving ants tolerated on an `n`-vertex instance.
    pub fn stall_limit(&self, n: usize) -> usize {
        self.stall_factor.saturating_mul(n)
    }

    /// Returns `true` if ant number `ant` (0-based) reinforces the best tour.
    pub(crate) fn reinforces_best(&self, ant: usize) -> bool {
        self.reinforce_best_every
            .is_some_and(|every| ant % every == every - 1)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(TspError::invalid_input("number of ants must be positive"));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(TspError::invalid_input(format!(
                "evaporation rate must lie in (0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if self.reinforce_best_every == Some(0) {
            return Err(TspError::invalid_input(
                "best-tour reinforcement cadence must be positive",
            ));
        }
        Ok(())
    }
}
