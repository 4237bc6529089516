//! Cycle cost and permutation validity.
//!
//! Every solver reports costs computed by [`tour_cost`], so a cost recomputed
//! from a returned tour always matches the reported one exactly.

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};

/// Cost of the cycle described by `order`.
///
/// Sums `cost[order[i]][order[i + 1]]` left to right, then adds the closing
/// edge `cost[order[n - 1]][order[0]]`. An empty order costs zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::evaluation::tour_cost;
///
/// let vertices = vec![Vertex::new(0, 0), Vertex::new(3, 0), Vertex::new(3, 4)];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// assert!((tour_cost(&cm, &[0, 1, 2]) - 12.0).abs() < 1e-10);
/// ```
pub fn tour_cost(costs: &CostMatrix, order: &[usize]) -> f64 {
    let (first, last) = match (order.first(), order.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return 0.0,
    };
    let mut total = 0.0;
    for pair in order.windows(2) {
        total += costs.get(pair[0], pair[1]);
    }
    total + costs.get(last, first)
}

/// Edges of the cycle described by `order`, closing edge last.
pub fn cycle_edges(order: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = order.len();
    (0..n).map(move |i| (order[i], order[(i + 1) % n]))
}

/// Returns `true` if `order` contains every index in `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Like [`is_permutation`], but explains what is wrong.
pub fn validate_tour(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(TspError::InvalidTour(format!(
            "expected {n} vertices, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &v) in order.iter().enumerate() {
        if v >= n {
            return Err(TspError::InvalidTour(format!(
                "vertex {v} at position {pos} is out of range"
            )));
        }
        if seen[v] {
            return Err(TspError::InvalidTour(format!(
                "vertex {v} appears twice (again at position {pos})"
            )));
        }
        seen[v] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vertex;

    fn square() -> CostMatrix {
        let vertices = vec![
            Vertex::new(0, 0),
            Vertex::new(0, 1),
            Vertex::new(1, 1),
            Vertex::new(1, 0),
        ];
        CostMatrix::from_vertices(&vertices).expect("valid")
    }

    #[test]
    fn test_tour_cost_includes_closing_edge() {
        let cm = square();
        assert!((tour_cost(&cm, &[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_rotation_invariant() {
        let cm = square();
        let a = tour_cost(&cm, &[0, 2, 1, 3]);
        let b = tour_cost(&cm, &[2, 1, 3, 0]);
        assert!((a - b).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_empty() {
        let cm = square();
        assert_eq!(tour_cost(&cm, &[]), 0.0);
    }

    #[test]
    fn test_cycle_edges() {
        let edges: Vec<_> = cycle_edges(&[2, 0, 1]).collect();
        assert_eq!(edges, vec![(2, 0), (0, 1), (1, 2)]);
        assert_eq!(cycle_edges(&[]).count(), 0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[2, 0, 0], 3));
        assert!(!is_permutation(&[2, 0, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(is_permutation(&[], 0));
    }

    #[test]
    fn test_validate_tour_messages() {
        let err = validate_tour(&[0, 0, 1], 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid tour: vertex 0 appears twice (again at position 1)"
        );
        assert!(validate_tour(&[1, 2, 0], 3).is_ok());
    }
}
