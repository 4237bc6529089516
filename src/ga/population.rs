//! Population of tours with truncation selection.

use rand::Rng;

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_cost;

use super::config::GaConfig;
use super::operators::{hybridize_into, mutate, random_permutation, MutationKind};

/// Parents followed by offspring scratch slots.
///
/// Layout of the working set: `parents | children (2 per crossover) | mutants`.
/// Only the parent slots carry meaning between generations; the scratch slots
/// are overwritten by every [`breed`](Self::breed).
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Vec<usize>>,
    costs: Vec<f64>,
    parents: usize,
    hybridizations: usize,
}

impl Population {
    /// Fills every slot with an independent random permutation of `0..n` and
    /// ranks the parent slots by cost.
    ///
    /// Fails with [`TspError::InvalidInput`] for fewer than two vertices or
    /// an empty population.
    pub fn random<R: Rng>(costs: &CostMatrix, config: &GaConfig, rng: &mut R) -> Result<Self> {
        let n = costs.size();
        if n < 2 {
            return Err(TspError::invalid_input(format!(
                "population needs at least 2 vertices, got {n}"
            )));
        }
        config.validate()?;
        Ok(Self::fill(costs, config, rng))
    }

    /// [`random`](Self::random) for inputs already checked by the solver.
    pub(crate) fn fill<R: Rng>(costs: &CostMatrix, config: &GaConfig, rng: &mut R) -> Self {
        let n = costs.size();
        let tours = (0..config.working_set_size())
            .map(|_| random_permutation(n, rng))
            .collect();
        let mut population = Self {
            tours,
            costs: vec![f64::INFINITY; config.working_set_size()],
            parents: config.population_size,
            hybridizations: config.hybridization_size,
        };
        population.rank(costs, population.parents);
        population
    }

    /// Overwrites the scratch slots with children and mutants of the parents.
    pub fn breed<R: Rng>(&mut self, rng: &mut R) {
        let n = self.tours[0].len();
        let (parents, scratch) = self.tours.split_at_mut(self.parents);
        let (children, mutants) = scratch.split_at_mut(2 * self.hybridizations);

        for pair in children.chunks_exact_mut(2) {
            let first = rng.random_range(0..parents.len());
            let second = rng.random_range(0..parents.len());
            let from = rng.random_range(0..n);
            let to = rng.random_range(0..n);
            let (child1, child2) = pair.split_at_mut(1);
            hybridize_into(
                &parents[first],
                &parents[second],
                from,
                to,
                &mut child1[0],
                &mut child2[0],
            );
        }

        for mutant in mutants.iter_mut() {
            let source = rng.random_range(0..parents.len());
            let kind = MutationKind::random(rng);
            let from = rng.random_range(0..n);
            let to = rng.random_range(0..n);
            mutant.copy_from_slice(&parents[source]);
            mutate(mutant, kind, from, to);
        }
    }

    /// Evaluates the whole working set and keeps the cheapest tours in the
    /// parent slots, cheapest first.
    pub fn select(&mut self, costs: &CostMatrix) {
        self.rank(costs, self.tours.len());
    }

    /// Sorts the first `count` slots by cost.
    fn rank(&mut self, costs: &CostMatrix, count: usize) {
        let rest = self.tours.split_off(count);
        let mut ranked: Vec<(f64, Vec<usize>)> = std::mem::take(&mut self.tours)
            .into_iter()
            .map(|tour| (tour_cost(costs, &tour), tour))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.tours.reserve(ranked.len() + rest.len());
        for (slot, (cost, tour)) in ranked.into_iter().enumerate() {
            self.costs[slot] = cost;
            self.tours.push(tour);
        }
        self.tours.extend(rest);
    }

    /// Current parents, cheapest first.
    pub fn parents(&self) -> &[Vec<usize>] {
        &self.tours[..self.parents]
    }

    /// Costs of the current parents, ascending.
    pub fn parent_costs(&self) -> &[f64] {
        &self.costs[..self.parents]
    }

    /// The cheapest parent and its cost.
    pub fn best(&self) -> (&[usize], f64) {
        (&self.tours[0], self.costs[0])
    }

    /// Total number of slots, parents included.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if the population holds no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}
