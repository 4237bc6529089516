//! Vertex type.

use serde::{Deserialize, Serialize};

/// A point in the plane with integer coordinates.
///
/// A vertex is identified by its index in the instance (`0..n`); the struct
/// only carries its location and never changes once generated.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
///
/// let a = Vertex::new(0, 0);
/// let b = Vertex::new(3, 4);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    x: i32,
    y: i32,
}

impl Vertex {
    /// Creates a vertex at the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to another vertex.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
