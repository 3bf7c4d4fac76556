use serde::{Deserialize, Serialize};

/// A point of a traced outline, read as the complex number `x + iy`.
///
/// Serialized as a bare `[x, y]` pair, which is how contour tracers
/// usually hand their output over.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
}

impl ContourPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for ContourPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<ContourPoint> for [f64; 2] {
    fn from(p: ContourPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for ContourPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A point on the reconstructed curve. Carries no identity beyond its
/// position in the sample stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParametricSample {
    pub x: f64,
    pub y: f64,
}

impl ParametricSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to a contour point.
    pub fn distance_to(self, p: ContourPoint) -> f64 {
        (self.x - p.x).hypot(self.y - p.y)
    }
}

impl std::ops::Add for ParametricSample {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
