use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::point::ParametricSample;

/// One DFT term, seen as a rotating vector: radius `magnitude`, initial
/// angle `phase`, and `frequency` full turns per traversal of [0, 2π).
///
/// The wire name of `frequency` is `freq`; `frequency` is accepted on read.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierCoefficient {
    pub magnitude: f64,
    pub phase: f64,
    #[serde(rename = "freq", alias = "frequency")]
    pub frequency: usize,
}

impl FourierCoefficient {
    pub fn new(magnitude: f64, phase: f64, frequency: usize) -> Self {
        Self {
            magnitude,
            phase,
            frequency,
        }
    }

    /// Polar form of the complex coefficient `re + i·im`.
    /// Phase comes from atan2, so it lies in (−π, π].
    pub fn from_complex(re: f64, im: f64, frequency: usize) -> Self {
        Self {
            magnitude: (re * re + im * im).sqrt(),
            phase: im.atan2(re),
            frequency,
        }
    }

    /// Same vector with the phase wrapped into (−π, π]. In-range phases
    /// are returned untouched.
    pub fn with_normalized_phase(self) -> Self {
        if self.phase > -PI && self.phase <= PI {
            return self;
        }
        Self {
            phase: PI - (PI - self.phase).rem_euclid(TAU),
            ..self
        }
    }

    /// Angle of the vector at parameter `time`: frequency·time + phase.
    pub fn angle_at(self, time: f64) -> f64 {
        self.frequency as f64 * time + self.phase
    }

    /// The vector's contribution to the curve at parameter `time`.
    pub fn vector_at(self, time: f64) -> ParametricSample {
        let (sin, cos) = self.angle_at(time).sin_cos();
        ParametricSample::new(self.magnitude * cos, self.magnitude * sin)
    }
}
