//! Tour type.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::{cycle_edges, tour_cost, validate_tour};

/// A Hamiltonian cycle over `0..n` together with its cost.
///
/// The order is always a permutation of the vertex indices; the last vertex
/// implicitly connects back to the first.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Tour, Vertex};
/// use u_tsp::distance::CostMatrix;
///
/// let vertices = vec![
///     Vertex::new(0, 0),
///     Vertex::new(0, 1),
///     Vertex::new(1, 1),
///     Vertex::new(1, 0),
/// ];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// let tour = Tour::from_order(&cm, vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(tour.cost(), 4.0);
/// assert_eq!(tour.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

/// Unchecked wire form of [`Tour`].
#[derive(Deserialize)]
struct RawTour {
    order: Vec<usize>,
    cost: f64,
}

impl TryFrom<RawTour> for Tour {
    type Error = TspError;

    /// The order must be a permutation of `0..len` and the cost a
    /// non-negative number.
    fn try_from(raw: RawTour) -> Result<Self> {
        validate_tour(&raw.order, raw.order.len())?;
        if raw.cost.is_nan() || raw.cost < 0.0 {
            return Err(TspError::InvalidTour(format!(
                "cost must be non-negative, got {}",
                raw.cost
            )));
        }
        Ok(Self::with_cost(raw.order, raw.cost))
    }
}

impl Tour {
    /// Validates `order` against the matrix and computes its cost.
    pub fn from_order(costs: &CostMatrix, order: Vec<usize>) -> Result<Self> {
        validate_tour(&order, costs.size())?;
        let cost = tour_cost(costs, &order);
        Ok(Self { order, cost })
    }

    /// Wraps an order whose cost was already computed by [`tour_cost`].
    pub(crate) fn with_cost(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// Visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Total cycle cost, including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the edges of the cycle, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        cycle_edges(&self.order)
    }
}
