//! Forward transform: contour points → Fourier coefficients.
//!
//! Naive O(N²) DFT. Every frequency is computed from the full input
//! independently of the others, so the outer loop splits across rayon
//! workers without any synchronization beyond collecting the results.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::coefficient::FourierCoefficient;
use crate::constants::PARALLEL_THRESHOLD;
use crate::point::ContourPoint;

/// How the per-frequency loop is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformMode {
    Sequential,
    Parallel,
    /// Parallel once the contour has at least `threshold` points.
    Auto { threshold: usize },
}

impl Default for TransformMode {
    fn default() -> Self {
        TransformMode::Auto {
            threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl TransformMode {
    fn is_parallel_for(self, n: usize) -> bool {
        match self {
            TransformMode::Sequential => false,
            TransformMode::Parallel => true,
            TransformMode::Auto { threshold } => n >= threshold,
        }
    }
}

/// DFT of `points`, one coefficient per frequency 0..N, in frequency order.
///
/// An empty contour yields an empty set; nothing is divided by zero.
/// Non-finite coordinates are not rejected and come out as non-finite
/// magnitude/phase.
pub fn transform(points: &[ContourPoint]) -> Vec<FourierCoefficient> {
    let coefficients: Vec<FourierCoefficient> = (0..points.len())
        .map(|k| coefficient_at(points, k))
        .collect();
    tracing::debug!(points = points.len(), mode = "sequential", "DFT complete");
    coefficients
}

/// Same result as [`transform`], with frequencies spread over the rayon pool.
/// Output order is still ascending frequency.
pub fn transform_parallel(points: &[ContourPoint]) -> Vec<FourierCoefficient> {
    let coefficients: Vec<FourierCoefficient> = (0..points.len())
        .into_par_iter()
        .map(|k| coefficient_at(points, k))
        .collect();
    tracing::debug!(points = points.len(), mode = "parallel", "DFT complete");
    coefficients
}

/// Dispatch on `mode`.
pub fn transform_with(points: &[ContourPoint], mode: TransformMode) -> Vec<FourierCoefficient> {
    if mode.is_parallel_for(points.len()) {
        transform_parallel(points)
    } else {
        transform(points)
    }
}

/// c_k = (1/N) Σ_n (x_n + i·y_n)·e^(−2πi·k·n/N)
fn coefficient_at(points: &[ContourPoint], k: usize) -> FourierCoefficient {
    let n_points = points.len();
    let step = TAU / n_points as f64;

    let mut re = 0.0;
    let mut im = 0.0;
    for (n, p) in points.iter().enumerate() {
        // k·n is reduced mod N before scaling; e^(−iθ) has period 2π so the
        // angle is unchanged, but large k·n products no longer lose bits.
        let angle = ((k * n) % n_points) as f64 * step;
        let (sin, cos) = angle.sin_cos();
        // (x + iy)(cos − i·sin)
        re += p.x * cos + p.y * sin;
        im += p.y * cos - p.x * sin;
    }

    let scale = n_points as f64;
    tracing::trace!(frequency = k, "coefficient computed");
    FourierCoefficient::from_complex(re / scale, im / scale, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn diamond() -> Vec<ContourPoint> {
        vec![
            ContourPoint::new(1.0, 0.0),
            ContourPoint::new(0.0, 1.0),
            ContourPoint::new(-1.0, 0.0),
            ContourPoint::new(0.0, -1.0),
        ]
    }

    #[test]
    fn test_empty_contour() {
        assert!(transform(&[]).is_empty());
        assert!(transform_parallel(&[]).is_empty());
    }

    #[test]
    fn test_single_point_is_mean_term() {
        let coeffs = transform(&[ContourPoint::new(1.0, 1.0)]);
        assert_eq!(coeffs.len(), 1);
        assert_eq!(coeffs[0].frequency, 0);
        assert!((coeffs[0].magnitude - 2f64.sqrt()).abs() < 1e-12);
        assert!((coeffs[0].phase - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_frequencies_in_order() {
        let coeffs = transform(&diamond());
        let freqs: Vec<usize> = coeffs.iter().map(|c| c.frequency).collect();
        assert_eq!(freqs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_diamond_has_single_unit_epicycle() {
        let coeffs = transform(&diamond());
        assert!((coeffs[1].magnitude - 1.0).abs() < 1e-12);
        assert!(coeffs[1].phase.abs() < 1e-12);
        for c in [coeffs[0], coeffs[2], coeffs[3]] {
            assert!(c.magnitude < 1e-12, "frequency {} leaked: {}", c.frequency, c.magnitude);
        }
    }

    #[test]
    fn test_constant_contour_is_pure_dc() {
        let points = vec![ContourPoint::new(2.0, -3.0); 5];
        let coeffs = transform(&points);
        assert!((coeffs[0].magnitude - 13f64.sqrt()).abs() < 1e-12);
        assert!(coeffs[1..].iter().all(|c| c.magnitude < 1e-12));
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let points = vec![ContourPoint::new(f64::NAN, 0.0), ContourPoint::new(1.0, 1.0)];
        let coeffs = transform(&points);
        assert_eq!(coeffs.len(), 2);
        assert!(coeffs.iter().all(|c| c.magnitude.is_nan()));
    }

    #[test]
    fn test_mode_dispatch_matches() {
        let points: Vec<ContourPoint> = (0..17)
            .map(|i| ContourPoint::new(i as f64, (i * i) as f64 * 0.1))
            .collect();
        let seq = transform_with(&points, TransformMode::Sequential);
        let par = transform_with(&points, TransformMode::Parallel);
        let auto = transform_with(&points, TransformMode::Auto { threshold: 4 });
        assert_eq!(seq, par);
        assert_eq!(seq, auto);
    }

    #[test]
    fn test_auto_threshold() {
        let mode = TransformMode::Auto { threshold: 10 };
        assert!(!mode.is_parallel_for(9));
        assert!(mode.is_parallel_for(10));
    }
}
