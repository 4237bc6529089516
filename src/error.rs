//! Error types shared by the cost model, the solvers, and the loaders.

use thiserror::Error;

/// Result type alias for fallible TSP operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised before any solver state is built.
///
/// The heuristics themselves never fail once their input is accepted: they
/// always return some valid tour.
#[derive(Error, Debug)]
pub enum TspError {
    /// Degenerate or out-of-range input (vertex count, matrix shape, sizes, rates).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A sequence that is not a permutation of `0..n`.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// Malformed matrix or vertex text.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TspError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
