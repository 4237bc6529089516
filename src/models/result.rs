//! Solver result type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Outcome of a solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best tour found.
    pub tour: Tour,
    /// Generations run (genetic), ants dispatched (ant colony), or construction
    /// steps taken (greedy).
    pub iterations: usize,
    /// `true` if a stall limit, time limit, or observer ended the run before
    /// its full budget was spent.
    pub stopped_early: bool,
}

impl SolveResult {
    /// Cost of the best tour.
    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Visiting order of the best tour.
    pub fn order(&self) -> &[usize] {
        self.tour.order()
    }
}
