//! Inverse transform as a sum of rotating vectors.
//!
//! Sampling at step i evaluates
//!   x = Σ m·cos(f·t + φ),  y = Σ m·sin(f·t + φ),  t = i·2π/steps
//! which is the inverse DFT when `steps` equals the source contour length
//! and every coefficient is present.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use crate::coefficient::FourierCoefficient;
use crate::point::ParametricSample;

/// Lazy, finite stream of curve samples in parameter order.
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    coefficients: &'a [FourierCoefficient],
    steps: usize,
    next: usize,
}

/// One sample per coefficient: the full-resolution reconstruction.
pub fn reconstruct(coefficients: &[FourierCoefficient]) -> Samples<'_> {
    reconstruct_with_steps(coefficients, coefficients.len())
}

/// Sample the series at `steps` equally spaced parameter values in [0, 2π).
///
/// Use this for truncated series, where the coefficient count no longer
/// matches the contour length.
pub fn reconstruct_with_steps(coefficients: &[FourierCoefficient], steps: usize) -> Samples<'_> {
    Samples {
        coefficients,
        steps,
        next: 0,
    }
}

/// Parameter value of step `index` out of `steps`.
pub fn time_at(index: usize, steps: usize) -> f64 {
    if steps == 0 {
        return 0.0;
    }
    index as f64 * (TAU / steps as f64)
}

/// Curve point at parameter `time`.
pub fn evaluate(coefficients: &[FourierCoefficient], time: f64) -> ParametricSample {
    coefficients
        .iter()
        .fold(ParametricSample::default(), |acc, c| acc + c.vector_at(time))
}

/// Tip of each vector in the chain at `time`, each vector anchored on the
/// previous tip, starting from the origin. The last entry is the curve
/// point itself. The chain follows the given order, so pass ranked
/// coefficients to get the largest circles first.
pub fn epicycle_chain(coefficients: &[FourierCoefficient], time: f64) -> Vec<ParametricSample> {
    coefficients
        .iter()
        .scan(ParametricSample::default(), |tip, c| {
            *tip = *tip + c.vector_at(time);
            Some(*tip)
        })
        .collect()
}

impl<'a> Samples<'a> {
    /// Number of parameter steps over the whole traversal.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Pair each remaining sample with its pen state.
    pub fn strokes(self) -> Strokes<'a> {
        Strokes {
            first: self.next == 0,
            samples: self,
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = ParametricSample;

    fn next(&mut self) -> Option<ParametricSample> {
        if self.next >= self.steps {
            return None;
        }
        let time = time_at(self.next, self.steps);
        self.next += 1;
        Some(evaluate(self.coefficients, time))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}

/// Drawing command for the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenStroke {
    /// Position without a visible stroke (pen up).
    MoveTo(ParametricSample),
    /// Visible segment from the previous position (pen down).
    LineTo(ParametricSample),
}

impl PenStroke {
    pub fn point(self) -> ParametricSample {
        match self {
            PenStroke::MoveTo(p) | PenStroke::LineTo(p) => p,
        }
    }
}

/// Samples tagged with pen state: the first is a move, the rest are lines.
#[derive(Clone, Debug)]
pub struct Strokes<'a> {
    samples: Samples<'a>,
    first: bool,
}

impl Iterator for Strokes<'_> {
    type Item = PenStroke;

    fn next(&mut self) -> Option<PenStroke> {
        let sample = self.samples.next()?;
        if self.first {
            self.first = false;
            Some(PenStroke::MoveTo(sample))
        } else {
            Some(PenStroke::LineTo(sample))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl ExactSizeIterator for Strokes<'_> {}

/// Rendering capability. The drawing state lives in the implementor.
pub trait Pen {
    fn move_to(&mut self, point: ParametricSample);
    fn line_to(&mut self, point: ParametricSample);

    fn stroke(&mut self, stroke: PenStroke) {
        match stroke {
            PenStroke::MoveTo(p) => self.move_to(p),
            PenStroke::LineTo(p) => self.line_to(p),
        }
    }
}

/// Drive `pen` through the sample stream: pen up to the first sample, then
/// a line to each subsequent one. Returns the number of samples drawn.
pub fn trace<P: Pen + ?Sized>(samples: Samples<'_>, pen: &mut P) -> usize {
    let mut drawn = 0;
    for stroke in samples.strokes() {
        pen.stroke(stroke);
        drawn += 1;
    }
    drawn
}

/// Pen that records every stroke. Handy for tests and for renderers that
/// need the whole path before they can emit anything.
#[derive(Clone, Debug, Default)]
pub struct RecordingPen {
    pub strokes: Vec<PenStroke>,
}

impl Pen for RecordingPen {
    fn move_to(&mut self, point: ParametricSample) {
        self.strokes.push(PenStroke::MoveTo(point));
    }

    fn line_to(&mut self, point: ParametricSample) {
        self.strokes.push(PenStroke::LineTo(point));
    }
}
