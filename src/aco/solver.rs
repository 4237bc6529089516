//! Ant-by-ant colony loop.

use rand::Rng;

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_cost;
use crate::models::{SolveResult, Tour, TourSnapshot};
use crate::progress::{NoProgress, ProgressObserver, StopCondition};
use crate::random::rng_from;

use super::ant::Ant;
use super::config::AcoConfig;
use super::trails::{DesirabilityMatrix, PheromoneMatrix};

const SOLVER_NAME: &str = "ant-colony";

/// Ant colony optimization with one pheromone update per ant.
///
/// Ants run strictly one after another: each builds a tour guided by the
/// trails left by all earlier ants, deposits `scale / cost` on the edges of
/// its tour, and then every trail evaporates. On a fixed cadence an ant
/// deposits on the best tour found so far instead of its own.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::aco::{AcoConfig, AntColonySolver};
///
/// let vertices = vec![
///     Vertex::new(0, 0),
///     Vertex::new(0, 1),
///     Vertex::new(1, 1),
///     Vertex::new(1, 0),
/// ];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// let config = AcoConfig::default().with_num_ants(200).with_seed(42);
///
/// let result = AntColonySolver::new(&cm, config).unwrap().solve_seeded();
/// assert!((result.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct AntColonySolver<'a> {
    costs: &'a CostMatrix,
    config: AcoConfig,
}

impl<'a> AntColonySolver<'a> {
    /// Validates the instance and parameters.
    ///
    /// Fails with [`TspError::InvalidInput`] for fewer than two vertices, zero
    /// ants, or an evaporation rate outside `(0, 1)`.
    pub fn new(costs: &'a CostMatrix, config: AcoConfig) -> Result<Self> {
        let n = costs.size();
        if n < 2 {
            return Err(TspError::invalid_input(format!(
                "ant colony needs at least 2 vertices, got {n}"
            )));
        }
        config.validate()?;
        Ok(Self { costs, config })
    }

    /// Parameters of this solver.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs with a generator seeded from [`AcoConfig::seed`].
    pub fn solve_seeded(&self) -> SolveResult {
        let mut rng = rng_from(self.config.seed);
        self.solve(&mut rng)
    }

    /// Dispatches ants until the ant budget, stall limit, or time limit runs out.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> SolveResult {
        self.solve_with(rng, &mut NoProgress)
    }

    /// Like [`solve`](Self::solve), reporting each improvement to `observer`.
    pub fn solve_with<R, O>(&self, rng: &mut R, observer: &mut O) -> SolveResult
    where
        R: Rng,
        O: ProgressObserver + ?Sized,
    {
        let config = &self.config;
        let n = self.costs.size();
        let mut colony = Colony::new(self.costs);
        log::info!(
            "Starting ant colony: {n} vertices, {} ants, evaporation {}, scale factor {:.3}",
            config.num_ants,
            config.evaporation_rate,
            colony.desirability.scale_factor()
        );

        let stop = StopCondition::start(config.time_limit);
        let stall_limit = config.stall_limit(n);
        let mut dispatched = 0;
        let mut stopped_early = false;

        for index in 0..config.num_ants {
            // The first ant always runs so that there is a tour to return.
            if index > 0 && stop.should_stop(observer) {
                log::info!("Stopping ant colony after {dispatched} ants");
                stopped_early = true;
                break;
            }
            let improved = colony.dispatch(config, index, rng);
            dispatched = index + 1;

            if improved {
                if let Some(best) = &colony.best {
                    log::debug!("Ant {index}: improved to {:.3}", best.cost());
                    observer.on_improvement(&TourSnapshot {
                        solver: SOLVER_NAME,
                        iteration: index,
                        order: best.order(),
                        cost: best.cost(),
                    });
                }
            } else if colony.stall > stall_limit {
                log::info!("Stopping ant colony: no improvement in {} ants", colony.stall);
                stopped_early = true;
                break;
            }
        }

        let tour = colony.best.unwrap_or_else(|| {
            let order: Vec<usize> = (0..n).collect();
            let cost = tour_cost(self.costs, &order);
            Tour::with_cost(order, cost)
        });
        log::info!("Finished ant colony. Best cost: {:.3}", tour.cost());
        SolveResult {
            tour,
            iterations: dispatched,
            stopped_early,
        }
    }
}

/// Working state of one solve call.
struct Colony<'a> {
    costs: &'a CostMatrix,
    pheromone: PheromoneMatrix,
    desirability: DesirabilityMatrix,
    ant: Ant,
    best: Option<Tour>,
    stall: usize,
}

impl<'a> Colony<'a> {
    fn new(costs: &'a CostMatrix) -> Self {
        let n = costs.size();
        Self {
            costs,
            pheromone: PheromoneMatrix::filled_with(n, 1.0 / n as f64),
            desirability: DesirabilityMatrix::from_costs(costs),
            ant: Ant::new(n),
            best: None,
            stall: 0,
        }
    }

    /// Runs ant number `index`: construction, pheromone update, best tracking.
    /// Returns `true` if the ant's own path became the new best.
    fn dispatch<R: Rng>(&mut self, config: &AcoConfig, index: usize, rng: &mut R) -> bool {
        let path = self.ant.construct(&self.pheromone, &self.desirability, rng);
        let path_cost = tour_cost(self.costs, path);
        log::trace!("Ant {index}: path cost {path_cost:.3}");

        let (deposit_path, deposit_cost) = match &self.best {
            Some(best) if config.reinforces_best(index) => (best.order(), best.cost()),
            _ => (path, path_cost),
        };
        let scale = self.desirability.scale_factor();
        let delta = if deposit_cost > 0.0 {
            scale / deposit_cost
        } else {
            scale
        };
        self.pheromone.deposit(deposit_path, delta);
        self.pheromone.evaporate(config.evaporation_rate);

        let improved = self.best.as_ref().map_or(true, |b| path_cost < b.cost());
        if improved {
            self.best = Some(Tour::with_cost(path.to_vec(), path_cost));
            self.stall = 0;
        } else {
            self.stall += 1;
        }
        improved
    }
}

/// Runs the ant colony with the given ant count and evaporation rate and a
/// random seed.
pub fn ant_colony(costs: &CostMatrix, num_ants: usize, evaporation_rate: f64) -> Result<SolveResult> {
    let config = AcoConfig::default()
        .with_num_ants(num_ants)
        .with_evaporation_rate(evaporation_rate);
    Ok(AntColonySolver::new(costs, config)?.solve_seeded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_permutation;
    use crate::models::Vertex;
    use crate::progress::FnObserver;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::time::Duration;

    fn scattered(n: i32) -> CostMatrix {
        let vertices: Vec<Vertex> = (0..n)
            .map(|i| Vertex::new((i * 37) % 101, (i * 53) % 89))
            .collect();
        CostMatrix::from_vertices(&vertices).expect("valid")
    }

    #[test]
    fn test_result_is_valid_tour() {
        let cm = scattered(20);
        let config = AcoConfig::default().with_num_ants(500);
        let result = AntColonySolver::new(&cm, config)
            .expect("valid")
            .solve(&mut create_rng(42));
        assert!(is_permutation(result.order(), 20));
        assert_eq!(result.cost(), tour_cost(&cm, result.order()));
        assert_eq!(result.iterations, 500);
    }

    #[test]
    fn test_points_on_a_line() {
        let vertices: Vec<Vertex> = [4, 0, 9, 2, 7, 5].iter().map(|&x| Vertex::new(x, 0)).collect();
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        let config = AcoConfig::default().with_num_ants(1_000);
        let result = AntColonySolver::new(&cm, config)
            .expect("valid")
            .solve(&mut create_rng(7));
        // Out to the far end and back
        assert_eq!(result.cost(), 18.0);
    }

    #[test]
    fn test_pheromone_stays_positive() {
        let cm = scattered(8);
        let config = AcoConfig::default().with_evaporation_rate(0.3);
        let mut colony = Colony::new(&cm);
        let mut rng = create_rng(1);
        for index in 0..2_000 {
            colony.dispatch(&config, index, &mut rng);
            assert!(colony.pheromone.min_value() > 0.0);
        }
    }

    #[test]
    fn test_pheromone_symmetric_after_updates() {
        let cm = scattered(6);
        let config = AcoConfig::default();
        let mut colony = Colony::new(&cm);
        let mut rng = create_rng(2);
        for index in 0..150 {
            colony.dispatch(&config, index, &mut rng);
        }
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(colony.pheromone[i][j], colony.pheromone[j][i]);
            }
        }
    }

    #[test]
    fn test_reinforcement_ant_deposits_on_best() {
        let cm = scattered(7);
        let config = AcoConfig::default().with_reinforce_best_every(Some(1));
        let mut colony = Colony::new(&cm);
        let mut rng = create_rng(4);
        colony.dispatch(&config, 0, &mut rng);
        let best = colony.best.clone().expect("first ant sets best");

        // Replay ant 1 by hand to predict the trails it leaves behind
        let mut expected = colony.pheromone.clone();
        let delta = colony.desirability.scale_factor() / best.cost();
        expected.deposit(best.order(), delta);
        expected.evaporate(config.evaporation_rate);

        colony.dispatch(&config, 1, &mut rng);
        assert_eq!(colony.pheromone, expected);
    }

    #[test]
    fn test_stall_limit_stops_early() {
        let vertices = vec![Vertex::new(0, 0), Vertex::new(3, 0), Vertex::new(3, 4)];
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        // Every tour over three vertices costs 12, so only ant 0 improves
        let config = AcoConfig::default()
            .with_num_ants(1_000)
            .with_stall_factor(2);
        let result = AntColonySolver::new(&cm, config)
            .expect("valid")
            .solve(&mut create_rng(0));
        assert!(result.stopped_early);
        assert_eq!(result.iterations, 1 + 2 * 3 + 1);
    }

    #[test]
    fn test_time_limit_still_returns_tour() {
        let cm = scattered(10);
        let config = AcoConfig::default()
            .with_num_ants(usize::MAX)
            .with_time_limit(Duration::ZERO);
        let result = AntColonySolver::new(&cm, config)
            .expect("valid")
            .solve(&mut create_rng(0));
        assert!(result.stopped_early);
        assert_eq!(result.iterations, 1);
        assert!(is_permutation(result.order(), 10));
    }

    #[test]
    fn test_improvements_strictly_decrease() {
        let cm = scattered(12);
        let solver = AntColonySolver::new(&cm, AcoConfig::default().with_num_ants(1_000))
            .expect("valid");
        let mut reported = Vec::new();
        let result = {
            let mut observer = FnObserver::new(|s| reported.push(s.cost));
            solver.solve_with(&mut create_rng(8), &mut observer)
        };
        assert!(reported.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(reported.last().copied(), Some(result.cost()));
    }

    #[test]
    fn test_all_zero_costs() {
        let cm = CostMatrix::from_data(3, vec![0.0; 9]).expect("valid");
        let result = ant_colony(&cm, 50, 0.5).expect("valid");
        assert!(is_permutation(result.order(), 3));
        assert_eq!(result.cost(), 0.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let cm = scattered(9);
        let config = AcoConfig::default().with_num_ants(300).with_seed(11);
        let solver = AntColonySolver::new(&cm, config).expect("valid");
        assert_eq!(solver.solve_seeded(), solver.solve_seeded());
    }

    #[test]
    fn test_rejects_invalid_input() {
        let single = CostMatrix::from_vertices(&[Vertex::new(0, 0)]).expect("valid");
        assert!(matches!(
            ant_colony(&single, 10, 0.5),
            Err(TspError::InvalidInput(_))
        ));
        let cm = scattered(4);
        assert!(ant_colony(&cm, 0, 0.5).is_err());
        assert!(ant_colony(&cm, 10, 1.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_any_instance_yields_permutation(
            points in prop::collection::vec((0i32..200, 0i32..200), 2..15),
            seed in any::<u64>(),
            rate in 0.05f64..0.95,
        ) {
            let vertices: Vec<Vertex> = points.into_iter().map(Vertex::from).collect();
            let cm = CostMatrix::from_vertices(&vertices).expect("valid");
            let config = AcoConfig::default().with_num_ants(120).with_evaporation_rate(rate);
            let result = AntColonySolver::new(&cm, config).expect("valid").solve(&mut create_rng(seed));
            prop_assert!(is_permutation(result.order(), vertices.len()));
            prop_assert_eq!(result.cost(), tour_cost(&cm, result.order()));
        }
    }
}
