//! Tour cost evaluation and permutation checks.

mod evaluator;

pub use evaluator::{cycle_edges, is_permutation, tour_cost, validate_tour};
