//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given vertex, always move to the
//! cheapest unvisited vertex, then close the cycle back to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. While tour
//! quality is typically 20-25% above optimal, it provides a fast,
//! deterministic baseline.

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::{Tour, TourSnapshot};
use crate::progress::{NoProgress, ProgressObserver};

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties between equally cheap vertices go to the lowest index, so the result
/// depends only on `costs` and `start`.
///
/// Fails with [`TspError::InvalidInput`] if the matrix has fewer than two
/// vertices or `start` is out of range.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let vertices = vec![
///     Vertex::new(0, 0),
///     Vertex::new(0, 1),
///     Vertex::new(1, 1),
///     Vertex::new(1, 0),
/// ];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
///
/// let tour = nearest_neighbor(&cm, 0).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert_eq!(tour.cost(), 4.0);
/// ```
pub fn nearest_neighbor(costs: &CostMatrix, start: usize) -> Result<Tour> {
    nearest_neighbor_with(costs, start, &mut NoProgress)
}

/// Like [`nearest_neighbor`], reporting the finished tour to `observer`.
pub fn nearest_neighbor_with<O>(costs: &CostMatrix, start: usize, observer: &mut O) -> Result<Tour>
where
    O: ProgressObserver + ?Sized,
{
    let n = costs.size();
    if n < 2 {
        return Err(TspError::invalid_input(format!(
            "nearest neighbor needs at least 2 vertices, got {n}"
        )));
    }
    if start >= n {
        return Err(TspError::invalid_input(format!(
            "start vertex {start} is out of range for {n} vertices"
        )));
    }

    log::debug!("Nearest neighbor from vertex {start} over {n} vertices");

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;
    let mut cost = 0.0;

    while let Some(next) = costs.nearest_unvisited(current, &visited) {
        cost += costs.get(current, next);
        visited[next] = true;
        order.push(next);
        current = next;
    }
    cost += costs.get(current, start);

    observer.on_improvement(&TourSnapshot {
        solver: "greedy",
        iteration: n - 1,
        order: &order,
        cost,
    });
    log::info!("Nearest neighbor tour cost: {cost:.3}");

    Ok(Tour::with_cost(order, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_permutation, tour_cost};
    use crate::models::Vertex;
    use crate::progress::FnObserver;

    fn line_vertices() -> CostMatrix {
        let vertices = vec![
            Vertex::new(0, 0),
            Vertex::new(1, 0),
            Vertex::new(2, 0),
            Vertex::new(3, 0),
        ];
        CostMatrix::from_vertices(&vertices).expect("valid")
    }

    #[test]
    fn test_nn_unit_square() {
        let vertices = vec![
            Vertex::new(0, 0),
            Vertex::new(0, 1),
            Vertex::new(1, 1),
            Vertex::new(1, 0),
        ];
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        let tour = nearest_neighbor(&cm, 0).expect("valid");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert!((tour.cost() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_line() {
        let cm = line_vertices();
        let tour = nearest_neighbor(&cm, 0).expect("valid");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((tour.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let vertices = vec![Vertex::new(0, 0), Vertex::new(10, 0), Vertex::new(1, 0)];
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        let tour = nearest_neighbor(&cm, 0).expect("valid");
        assert_eq!(tour.order(), &[0, 2, 1]);
    }

    #[test]
    fn test_nn_other_start() {
        let cm = line_vertices();
        let tour = nearest_neighbor(&cm, 2).expect("valid");
        // From 2: 1 and 3 tie at distance 1, lowest index wins
        assert_eq!(tour.order(), &[2, 1, 0, 3]);
        assert!(is_permutation(tour.order(), 4));
    }

    #[test]
    fn test_nn_cost_matches_evaluation() {
        let vertices: Vec<Vertex> = (0..30)
            .map(|i| Vertex::new((i * 37) % 101, (i * 53) % 89))
            .collect();
        let cm = CostMatrix::from_vertices(&vertices).expect("valid");
        for start in [0, 7, 29] {
            let tour = nearest_neighbor(&cm, start).expect("valid");
            assert_eq!(tour.order()[0], start);
            assert!(is_permutation(tour.order(), 30));
            assert_eq!(tour.cost(), tour_cost(&cm, tour.order()));
        }
    }

    #[test]
    fn test_nn_deterministic() {
        let cm = line_vertices();
        let a = nearest_neighbor(&cm, 1).expect("valid");
        let b = nearest_neighbor(&cm, 1).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_nn_rejects_single_vertex() {
        let cm = CostMatrix::from_vertices(&[Vertex::new(0, 0)]).expect("valid");
        assert!(matches!(
            nearest_neighbor(&cm, 0),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nn_rejects_bad_start() {
        let cm = line_vertices();
        assert!(nearest_neighbor(&cm, 4).is_err());
    }

    #[test]
    fn test_nn_reports_once() {
        let cm = line_vertices();
        let mut reports = 0;
        let mut observer = FnObserver::new(|s| {
            assert_eq!(s.solver, "greedy");
            reports += 1;
        });
        nearest_neighbor_with(&cm, 0, &mut observer).expect("valid");
        drop(observer);
        assert_eq!(reports, 1);
    }
}
