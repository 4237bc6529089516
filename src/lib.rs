//! # u-tsp
//!
//! Travelling salesman heuristics over a fixed set of points in the plane:
//! greedy nearest-neighbor construction, a genetic algorithm, and ant colony
//! optimization, all sharing one cost model.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vertex, Tour, SolveResult, TourSnapshot)
//! - [`distance`] — Symmetric cost matrix with an unreachable diagonal
//! - [`evaluation`] — Tour cost and permutation checks
//! - [`constructive`] — Nearest-neighbor construction
//! - [`ga`] — Genetic algorithm with permutation-preserving operators
//! - [`aco`] — Ant colony optimization with per-ant pheromone updates
//! - [`progress`] — Improvement observers and wall-clock limits
//! - [`generation`] — Random grid instances
//! - [`persist`] — Plain-text vertex and matrix files
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::Vertex;
//! use u_tsp::distance::CostMatrix;
//! use u_tsp::constructive::nearest_neighbor;
//! use u_tsp::ga::{GaConfig, GeneticSolver};
//! use u_tsp::aco::{AcoConfig, AntColonySolver};
//!
//! let vertices: Vec<Vertex> = (0..10).map(|i| Vertex::new((i * 7) % 23, (i * 11) % 17)).collect();
//! let cm = CostMatrix::from_vertices(&vertices).unwrap();
//!
//! let greedy = nearest_neighbor(&cm, 0).unwrap();
//! let ga = GeneticSolver::new(&cm, GaConfig::default().with_generations(50).with_seed(1))
//!     .unwrap()
//!     .solve_seeded();
//! let aco = AntColonySolver::new(&cm, AcoConfig::default().with_num_ants(500).with_seed(1))
//!     .unwrap()
//!     .solve_seeded();
//!
//! for cost in [greedy.cost(), ga.cost(), aco.cost()] {
//!     assert!(cost.is_finite());
//! }
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod generation;
pub mod models;
pub mod persist;
pub mod progress;
pub mod random;

pub use error::{Result, TspError};
