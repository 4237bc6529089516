//! Probabilistic tour construction by a single ant.

use rand::Rng;

use super::trails::{DesirabilityMatrix, PheromoneMatrix};

/// Reusable buffers for building one ant path after another.
#[derive(Debug, Clone)]
pub struct Ant {
    visited: Vec<bool>,
    cumulative: Vec<f64>,
    path: Vec<usize>,
}

impl Ant {
    /// Buffers for an `n`-vertex instance.
    pub fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            cumulative: vec![0.0; n],
            path: Vec::with_capacity(n),
        }
    }

    /// Walks a full tour from a uniformly random start vertex.
    ///
    /// At each step every unvisited vertex `j` gets weight
    /// `pheromone[current][j] * desirability[current][j]`; the weights are
    /// normalized and the next vertex is drawn by [`roulette_select`].
    pub fn construct<R: Rng>(
        &mut self,
        pheromone: &PheromoneMatrix,
        desirability: &DesirabilityMatrix,
        rng: &mut R,
    ) -> &[usize] {
        let n = self.visited.len();
        self.visited.fill(false);
        self.path.clear();

        let start = rng.random_range(0..n);
        self.visited[start] = true;
        self.path.push(start);
        let mut current = start;

        for _ in 1..n {
            let pheromone_row = &pheromone[current];
            let desirability_row = &desirability[current];

            let mut sum = 0.0;
            for (j, p) in self.cumulative.iter_mut().enumerate() {
                *p = if self.visited[j] {
                    0.0
                } else {
                    pheromone_row[j] * desirability_row[j]
                };
                sum += *p;
            }
            for p in &mut self.cumulative {
                *p /= sum;
            }
            for j in 1..n {
                self.cumulative[j] += self.cumulative[j - 1];
            }

            let draw: f64 = rng.random();
            let Some(next) = roulette_select(&self.cumulative, &self.visited, draw) else {
                break;
            };
            self.visited[next] = true;
            self.path.push(next);
            current = next;
        }
        &self.path
    }

    /// The most recently constructed path.
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

/// Picks the vertex whose cumulative-probability interval contains `draw`.
///
/// Intervals are scanned in index order and the first one with
/// `draw < cumulative[j]` wins. When round-off leaves `draw` past the last
/// interval, the highest-index unvisited vertex is chosen. Returns `None`
/// only if every vertex is visited.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::roulette_select;
///
/// let cumulative = [0.0, 0.25, 0.25, 1.0];
/// let visited = [true, false, true, false];
/// assert_eq!(roulette_select(&cumulative, &visited, 0.1), Some(1));
/// assert_eq!(roulette_select(&cumulative, &visited, 0.25), Some(3));
/// ```
pub fn roulette_select(cumulative: &[f64], visited: &[bool], draw: f64) -> Option<usize> {
    cumulative
        .iter()
        .zip(visited)
        .position(|(&c, &seen)| !seen && draw < c)
        .or_else(|| visited.iter().rposition(|&seen| !seen))
}
