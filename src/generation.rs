//! Random instance generation.
//!
//! Vertices are sampled on a regular grid inside a bordered canvas, the way
//! instances are laid out for display. Solvers never depend on this module:
//! any source of [`Vertex`] values works.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::models::Vertex;

/// A source of problem instances.
pub trait VertexGenerator {
    /// Produces `n` vertices.
    fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<Vertex>>;
}

/// Samples vertices on a `step`-spaced grid inside a `width × height` canvas.
///
/// Each coordinate is `k * step + border` with `k` drawn uniformly from
/// `0..(extent - 3 * border) / step`, which leaves a border on the low side
/// and twice that on the high side. Duplicate vertices are possible.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::generation::{GridVertexGenerator, VertexGenerator};
///
/// let generator = GridVertexGenerator::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let vertices = generator.generate(150, &mut rng).unwrap();
/// assert_eq!(vertices.len(), 150);
/// assert!(vertices.iter().all(|v| v.x() >= 25 && v.y() >= 25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridVertexGenerator {
    /// Canvas width.
    pub width: i32,
    /// Canvas height.
    pub height: i32,
    /// Grid spacing.
    pub step: i32,
    /// Margin kept free on the low side of each axis.
    pub border: i32,
}

impl Default for GridVertexGenerator {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            step: 8,
            border: 25,
        }
    }
}

impl GridVertexGenerator {
    /// Sets the canvas size.
    pub fn with_canvas(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the grid spacing.
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    /// Sets the border margin.
    pub fn with_border(mut self, border: i32) -> Self {
        self.border = border;
        self
    }

    /// Number of grid slots along an axis of the given extent.
    fn slots(&self, extent: i32, axis: &str) -> Result<i32> {
        if self.step <= 0 {
            return Err(TspError::invalid_input(format!(
                "grid step must be positive, got {}",
                self.step
            )));
        }
        let slots = (extent - 3 * self.border) / self.step;
        if slots <= 0 {
            return Err(TspError::invalid_input(format!(
                "{axis} {extent} leaves no room for vertices with border {} and step {}",
                self.border, self.step
            )));
        }
        Ok(slots)
    }
}

impl VertexGenerator for GridVertexGenerator {
    fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<Vertex>> {
        if n == 0 {
            return Err(TspError::invalid_input("at least one vertex is required"));
        }
        let x_slots = self.slots(self.width, "width")?;
        let y_slots = self.slots(self.height, "height")?;
        let vertices = (0..n)
            .map(|_| {
                let x = rng.random_range(0..x_slots) * self.step + self.border;
                let y = rng.random_range(0..y_slots) * self.step + self.border;
                Vertex::new(x, y)
            })
            .collect();
        log::debug!(
            "Generated {n} vertices on a {}x{} canvas (step {}, border {})",
            self.width,
            self.height,
            self.step,
            self.border
        );
        Ok(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vertices_inside_canvas() {
        let generator = GridVertexGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let vertices = generator.generate(500, &mut rng).expect("valid");
        for v in &vertices {
            assert!(v.x() >= 25 && v.x() < 1200 - 2 * 25);
            assert!(v.y() >= 25 && v.y() < 800 - 2 * 25);
            assert_eq!((v.x() - 25) % 8, 0);
            assert_eq!((v.y() - 25) % 8, 0);
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let generator = GridVertexGenerator::default().with_canvas(400, 300);
        let a = generator
            .generate(20, &mut StdRng::seed_from_u64(1))
            .expect("valid");
        let b = generator
            .generate(20, &mut StdRng::seed_from_u64(1))
            .expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_zero_vertices() {
        let generator = GridVertexGenerator::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generator.generate(0, &mut rng).is_err());
    }

    #[test]
    fn test_rejects_cramped_canvas() {
        let generator = GridVertexGenerator::default()
            .with_canvas(60, 60)
            .with_border(25);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generator.generate(3, &mut rng),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let generator = GridVertexGenerator::default().with_step(0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generator.generate(3, &mut rng).is_err());
    }
}
