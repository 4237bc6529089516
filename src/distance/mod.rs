//! Edge cost matrices.
//!
//! Provides the dense, symmetric cost matrix every solver reads from.

mod matrix;

pub use matrix::{CostMatrix, UNREACHABLE};
