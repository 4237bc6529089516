//! Pheromone and desirability matrices.
//!
//! Both are dense, symmetric n×n grids indexed row-first (`m[i][j]`). They are
//! allocated per solve call and owned by that call alone.

use std::ops::Index;

use crate::distance::CostMatrix;
use crate::evaluation::cycle_edges;

/// Smallest pheromone value kept after evaporation, so that long runs never
/// underflow an edge to zero.
pub const PHEROMONE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Per-edge pheromone, reinforced by traversed tours and decayed after every ant.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Every entry set to `initial`.
    pub fn filled_with(size: usize, initial: f64) -> Self {
        Self {
            size,
            data: vec![initial; size * size],
        }
    }

    /// Adds `delta` to both directions of every edge of the cycle `order`,
    /// closing edge included.
    pub fn deposit(&mut self, order: &[usize], delta: f64) {
        for (from, to) in cycle_edges(order) {
            self.data[from * self.size + to] += delta;
            self.data[to * self.size + from] += delta;
        }
    }

    /// Multiplies every entry by `rate`.
    pub fn evaporate(&mut self, rate: f64) {
        for value in &mut self.data {
            *value = (*value * rate).max(PHEROMONE_FLOOR);
        }
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<usize> for PheromoneMatrix {
    type Output = [f64];
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index * self.size..(index + 1) * self.size]
    }
}

/// Static per-edge bias towards short edges: `scale / cost`, or `scale` for
/// zero-cost edges.
#[derive(Debug, Clone, PartialEq)]
pub struct DesirabilityMatrix {
    size: usize,
    data: Vec<f64>,
    scale_factor: f64,
}

impl DesirabilityMatrix {
    /// Derives desirability from `costs`.
    ///
    /// The scale factor is the largest edge cost; an all-zero matrix uses 1.
    pub fn from_costs(costs: &CostMatrix) -> Self {
        let size = costs.size();
        let scale_factor = match costs.max_edge_cost() {
            Some(max) if max > 0.0 => max,
            _ => 1.0,
        };
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for &cost in costs.row(i) {
                data.push(if cost == 0.0 {
                    scale_factor
                } else {
                    scale_factor / cost
                });
            }
        }
        Self {
            size,
            data,
            scale_factor,
        }
    }

    /// Normalizing constant for deposits and desirability.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<usize> for DesirabilityMatrix {
    type Output = [f64];
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index * self.size..(index + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::UNREACHABLE;
    use crate::models::Vertex;

    fn triangle() -> CostMatrix {
        let vertices = vec![Vertex::new(0, 0), Vertex::new(3, 0), Vertex::new(3, 4)];
        CostMatrix::from_vertices(&vertices).expect("valid")
    }

    #[test]
    fn test_deposit_symmetric_with_closing_edge() {
        let mut p = PheromoneMatrix::filled_with(3, 0.5);
        p.deposit(&[0, 1, 2], 1.0);
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            assert_eq!(p[i][j], 1.5);
            assert_eq!(p[j][i], 1.5);
        }
        for i in 0..3 {
            assert_eq!(p[i][i], 0.5);
        }
    }

    #[test]
    fn test_evaporate_scales_every_entry() {
        let mut p = PheromoneMatrix::filled_with(2, 1.0);
        p.evaporate(0.25);
        assert!((0..2).all(|i| (0..2).all(|j| p[i][j] == 0.25)));
    }

    #[test]
    fn test_evaporate_never_reaches_zero() {
        let mut p = PheromoneMatrix::filled_with(3, 1.0 / 3.0);
        for _ in 0..5_000 {
            p.evaporate(0.5);
        }
        assert!(p.min_value() > 0.0);
        assert_eq!(p.min_value(), PHEROMONE_FLOOR);
    }

    #[test]
    fn test_desirability_scale() {
        let d = DesirabilityMatrix::from_costs(&triangle());
        assert!((d.scale_factor() - 5.0).abs() < 1e-10);
        assert!((d[0][1] - 5.0 / 3.0).abs() < 1e-10);
        assert!((d[1][2] - 5.0 / 4.0).abs() < 1e-10);
        assert!((d[0][2] - 1.0).abs() < 1e-10);
        assert_eq!(d[1][1], 5.0 / UNREACHABLE);
    }

    #[test]
    fn test_desirability_zero_cost_guard() {
        let cm = CostMatrix::from_vertices(&[Vertex::new(1, 1), Vertex::new(1, 1), Vertex::new(4, 5)])
            .expect("valid");
        let d = DesirabilityMatrix::from_costs(&cm);
        assert_eq!(d[0][1], d.scale_factor());
        assert!(d[0][1].is_finite());
    }

    #[test]
    fn test_desirability_all_zero_matrix() {
        let cm = CostMatrix::from_data(2, vec![0.0; 4]).expect("valid");
        let d = DesirabilityMatrix::from_costs(&cm);
        assert_eq!(d.scale_factor(), 1.0);
        assert_eq!(d[0][1], 1.0);
        assert_eq!(d.size(), 2);
    }
}
