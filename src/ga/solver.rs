//! Generational loop of the genetic algorithm.

use rand::Rng;

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::{SolveResult, Tour, TourSnapshot};
use crate::progress::{NoProgress, ProgressObserver, StopCondition};
use crate::random::rng_from;

use super::config::GaConfig;
use super::population::Population;

const SOLVER_NAME: &str = "genetic";

/// Genetic algorithm over tour permutations.
///
/// Starts from a random population, then each generation breeds children by
/// [`hybridize`](super::hybridize) and mutants by [`mutate`](super::mutate)
/// and truncates the working set back to the cheapest `population_size`
/// tours. The incumbent can never get worse between generations.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::ga::{GaConfig, GeneticSolver};
///
/// let vertices = vec![
///     Vertex::new(0, 0),
///     Vertex::new(0, 1),
///     Vertex::new(1, 1),
///     Vertex::new(1, 0),
/// ];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_hybridization_size(10)
///     .with_mutation_size(5)
///     .with_generations(50)
///     .with_seed(42);
///
/// let result = GeneticSolver::new(&cm, config).unwrap().solve_seeded();
/// assert!((result.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<'a> {
    costs: &'a CostMatrix,
    config: GaConfig,
}

impl<'a> GeneticSolver<'a> {
    /// Validates the instance and parameters.
    ///
    /// Fails with [`TspError::InvalidInput`] for fewer than two vertices or
    /// an empty population.
    pub fn new(costs: &'a CostMatrix, config: GaConfig) -> Result<Self> {
        let n = costs.size();
        if n < 2 {
            return Err(TspError::invalid_input(format!(
                "genetic algorithm needs at least 2 vertices, got {n}"
            )));
        }
        config.validate()?;
        Ok(Self { costs, config })
    }

    /// Parameters of this solver.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs with a generator seeded from [`GaConfig::seed`].
    pub fn solve_seeded(&self) -> SolveResult {
        let mut rng = rng_from(self.config.seed);
        self.solve(&mut rng)
    }

    /// Runs all generations.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> SolveResult {
        self.solve_with(rng, &mut NoProgress)
    }

    /// Runs all generations, reporting each improvement to `observer`.
    pub fn solve_with<R, O>(&self, rng: &mut R, observer: &mut O) -> SolveResult
    where
        R: Rng,
        O: ProgressObserver + ?Sized,
    {
        let config = &self.config;
        log::info!(
            "Starting genetic algorithm: {} vertices, population {}, {} crossovers, {} mutants, {} generations",
            self.costs.size(),
            config.population_size,
            config.hybridization_size,
            config.mutation_size,
            config.generations
        );

        let stop = StopCondition::start(config.time_limit);
        let mut population = Population::fill(self.costs, config, rng);
        let mut best_cost = population.best().1;
        report(observer, &population, 0);

        let mut completed = 0;
        let mut stopped_early = false;
        for generation in 1..=config.generations {
            if stop.should_stop(observer) {
                log::info!("Stopping genetic algorithm after {completed} generations");
                stopped_early = true;
                break;
            }
            population.breed(rng);
            population.select(self.costs);
            completed = generation;

            let cost = population.best().1;
            log::trace!("Generation {generation}: best cost {cost:.3}");
            if cost < best_cost {
                best_cost = cost;
                log::debug!("Generation {generation}: improved to {cost:.3}");
                report(observer, &population, generation);
            }
        }

        let (order, cost) = population.best();
        log::info!("Finished genetic algorithm. Best cost: {cost:.3}");
        SolveResult {
            tour: Tour::with_cost(order.to_vec(), cost),
            iterations: completed,
            stopped_early,
        }
    }
}

fn report<O: ProgressObserver + ?Sized>(observer: &mut O, population: &Population, iteration: usize) {
    let (order, cost) = population.best();
    observer.on_improvement(&TourSnapshot {
        solver: SOLVER_NAME,
        iteration,
        order,
        cost,
    });
}

/// Runs the genetic algorithm with the given sizes and a random seed.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::ga::genetic;
///
/// let vertices: Vec<Vertex> = (0..8).map(|i| Vertex::new(i * 10, (i % 3) * 7)).collect();
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// let result = genetic(&cm, 30, 10, 5, 100).unwrap();
/// assert_eq!(result.tour.len(), 8);
/// ```
pub fn genetic(
    costs: &CostMatrix,
    population_size: usize,
    hybridization_size: usize,
    mutation_size: usize,
    generations: usize,
) -> Result<SolveResult> {
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_hybridization_size(hybridization_size)
        .with_mutation_size(mutation_size)
        .with_generations(generations);
    Ok(GeneticSolver::new(costs, config)?.solve_seeded())
}
