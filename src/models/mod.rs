//! Domain model types for travelling salesman problems.
//!
//! Provides the core values shared by every solver: vertices with integer
//! coordinates, tours as permutations with their cycle cost, solver results,
//! and read-only snapshots handed to progress observers.

mod result;
mod snapshot;
mod tour;
mod vertex;

pub use result::SolveResult;
pub use snapshot::TourSnapshot;
pub use tour::Tour;
pub use vertex::Vertex;
