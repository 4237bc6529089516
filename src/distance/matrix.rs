//! Dense cost matrix.

use crate::error::{Result, TspError};
use crate::models::Vertex;

/// Cost stored on the diagonal.
///
/// Larger than any real edge cost, so a self-loop is never the cheapest move.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A dense n×n matrix of edge costs stored in row-major order.
///
/// Off-diagonal entries are finite, non-negative, and symmetric. Diagonal
/// entries always hold [`UNREACHABLE`]. The matrix is read-only once built.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::{CostMatrix, UNREACHABLE};
///
/// let vertices = vec![Vertex::new(0, 0), Vertex::new(3, 4), Vertex::new(6, 8)];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// assert!((cm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(cm.get(2, 2), UNREACHABLE);
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    fn with_size(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = UNREACHABLE;
        }
        Self { data, size }
    }

    /// Computes the Euclidean cost matrix of the given vertices.
    ///
    /// Fails with [`TspError::InvalidInput`] if `vertices` is empty.
    pub fn from_vertices(vertices: &[Vertex]) -> Result<Self> {
        let n = vertices.len();
        if n == 0 {
            return Err(TspError::invalid_input("at least one vertex is required"));
        }
        let mut cm = Self::with_size(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = vertices[i].distance_to(&vertices[j]);
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        Ok(cm)
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    ///
    /// Whatever the grid holds on its diagonal is replaced by [`UNREACHABLE`].
    /// Fails if the grid is empty, has the wrong length, or holds an
    /// off-diagonal cost that is negative, non-finite, or asymmetric.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(TspError::invalid_input("cost matrix is empty"));
        }
        if data.len() != size * size {
            return Err(TspError::invalid_input(format!(
                "expected {} costs for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let mut cm = Self { data, size };
        for i in 0..size {
            cm.set(i, i, UNREACHABLE);
            for j in (i + 1)..size {
                let (a, b) = (cm.get(i, j), cm.get(j, i));
                if !a.is_finite() || a < 0.0 {
                    return Err(TspError::invalid_input(format!(
                        "cost ({i}, {j}) = {a} is not a finite non-negative value"
                    )));
                }
                if a != b {
                    return Err(TspError::invalid_input(format!(
                        "cost ({i}, {j}) = {a} differs from ({j}, {i}) = {b}"
                    )));
                }
            }
        }
        Ok(cm)
    }

    /// Creates a cost matrix from a vector of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TspError::invalid_input(format!(
                "row {i} has {} costs, expected {size}",
                row.len()
            )));
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Returns the cost of the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Largest off-diagonal cost, or `None` for a single-vertex matrix.
    pub fn max_edge_cost(&self) -> Option<f64> {
        let mut max: Option<f64> = None;
        for i in 0..self.size {
            for j in 0..self.size {
                if i == j {
                    continue;
                }
                let c = self.get(i, j);
                if max.map_or(true, |m| c > m) {
                    max = Some(c);
                }
            }
        }
        max
    }

    /// Returns the cheapest vertex reachable from `from` that is not yet visited.
    ///
    /// Candidates are scanned in ascending index order and the first minimum
    /// wins, so ties resolve to the lowest index. Returns `None` once every
    /// vertex is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (to, &cost) in self.row(from).iter().enumerate() {
            if visited[to] {
                continue;
            }
            match best {
                Some((_, c)) if c <= cost => {}
                _ => best = Some((to, cost)),
            }
        }
        best.map(|(to, _)| to)
    }
}
