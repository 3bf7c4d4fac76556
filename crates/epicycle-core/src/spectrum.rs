use rayon::prelude::*;

use crate::coefficient::FourierCoefficient;
use crate::point::{ContourPoint, ParametricSample};
use crate::rank::{rank_in_place, truncate};
use crate::reconstruct::{Samples, epicycle_chain, reconstruct_with_steps};
use crate::transform::{TransformMode, transform_with};

/// Ranked coefficient set of one contour.
///
/// Remembers the length of the contour it came from, so a truncated
/// spectrum still samples the curve at the original resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    points: usize,
    coefficients: Vec<FourierCoefficient>,
}

impl Spectrum {
    /// Transform then rank one contour.
    pub fn from_contour(contour: &[ContourPoint], mode: TransformMode) -> Self {
        let mut coefficients = transform_with(contour, mode);
        rank_in_place(&mut coefficients);
        Self {
            points: contour.len(),
            coefficients,
        }
    }

    /// Wrap coefficients that are already ranked. Callers are responsible
    /// for the frequency invariants; `serde_compat` checks them on import.
    pub(crate) fn from_ranked(points: usize, coefficients: Vec<FourierCoefficient>) -> Self {
        Self {
            points,
            coefficients,
        }
    }

    /// Number of points in the source contour.
    pub fn len(&self) -> usize {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Coefficients, largest magnitude first.
    pub fn coefficients(&self) -> &[FourierCoefficient] {
        &self.coefficients
    }

    /// Keep only the `top_k` largest epicycles. `None` keeps all.
    pub fn truncated(&self, top_k: Option<usize>) -> Self {
        Self {
            points: self.points,
            coefficients: truncate(&self.coefficients, top_k).to_vec(),
        }
    }

    /// Curve samples at the source contour's resolution.
    pub fn samples(&self) -> Samples<'_> {
        reconstruct_with_steps(&self.coefficients, self.points)
    }

    pub fn samples_with_steps(&self, steps: usize) -> Samples<'_> {
        reconstruct_with_steps(&self.coefficients, steps)
    }

    /// Vector tips at `time`, largest circle first.
    pub fn chain_at(&self, time: f64) -> Vec<ParametricSample> {
        epicycle_chain(&self.coefficients, time)
    }
}

/// Run the transform pipeline over independent contours. Contours are
/// spread over the rayon pool unless `mode` is sequential; the output keeps
/// input order either way.
pub fn spectra_for(contours: &[Vec<ContourPoint>], mode: TransformMode) -> Vec<Spectrum> {
    let spectra: Vec<Spectrum> = if mode == TransformMode::Sequential {
        contours
            .iter()
            .map(|c| Spectrum::from_contour(c, mode))
            .collect()
    } else {
        contours
            .par_iter()
            .map(|c| Spectrum::from_contour(c, mode))
            .collect()
    };
    tracing::debug!(contours = contours.len(), ?mode, "spectra computed");
    spectra
}
