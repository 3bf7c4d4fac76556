//! Integration tests exercising the full pipeline:
//! contour → transform → rank → reconstruct → pen.

use approx::assert_abs_diff_eq;
use epicycle_core::{
    ContourPoint, EPSILON, FourierCoefficient, PenStroke, RecordingPen, Spectrum, TransformMode,
    export_spectra, import_spectra, rank, reconstruct, reconstruct_with_steps, trace, transform,
    transform_parallel,
};
use proptest::prelude::*;

fn diamond() -> Vec<ContourPoint> {
    vec![
        ContourPoint::new(1.0, 0.0),
        ContourPoint::new(0.0, 1.0),
        ContourPoint::new(-1.0, 0.0),
        ContourPoint::new(0.0, -1.0),
    ]
}

/// A traced outline recentred the way a 800×800 canvas with origin
/// (300, 300) would produce it.
fn outline() -> Vec<ContourPoint> {
    let raw = [
        (310, 220), (340, 228), (362, 250), (370, 280), (362, 310), (340, 332),
        (310, 340), (280, 332), (258, 310), (250, 280), (258, 250), (280, 228),
        (300, 240), (295, 260),
    ];
    raw.iter()
        .map(|&(px, py)| ContourPoint::new(px as f64 - 300.0, -(py as f64) + 300.0))
        .collect()
}

fn assert_reproduces(points: &[ContourPoint], coeffs: &[FourierCoefficient], tol: f64) {
    let samples: Vec<_> = reconstruct(coeffs).collect();
    assert_eq!(samples.len(), points.len());
    for (s, p) in samples.iter().zip(points) {
        assert_abs_diff_eq!(s.x, p.x, epsilon = tol);
        assert_abs_diff_eq!(s.y, p.y, epsilon = tol);
    }
}

#[test]
fn diamond_scenario() {
    let coeffs = rank(&transform(&diamond()));

    assert_eq!(coeffs[0].frequency, 1);
    assert_abs_diff_eq!(coeffs[0].magnitude, 1.0, epsilon = EPSILON);
    for c in &coeffs[1..] {
        assert_abs_diff_eq!(c.magnitude, 0.0, epsilon = EPSILON);
    }

    assert_reproduces(&diamond(), &coeffs, EPSILON);
}

#[test]
fn outline_roundtrip_through_ranking() {
    let points = outline();
    let coeffs = rank(&transform(&points));
    assert_reproduces(&points, &coeffs, 1e-9);
}

#[test]
fn ranking_does_not_change_geometry() {
    let points = outline();
    let raw = transform(&points);
    let ranked = rank(&raw);
    for (a, b) in reconstruct(&raw).zip(reconstruct(&ranked)) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_lengths() {
    assert!(transform(&[]).is_empty());
    assert_eq!(reconstruct(&[]).count(), 0);

    let single = [ContourPoint::new(-3.0, 4.0)];
    let coeffs = transform(&single);
    assert_eq!(coeffs.len(), 1);
    assert_eq!(coeffs[0].frequency, 0);
    assert_abs_diff_eq!(coeffs[0].magnitude, 5.0, epsilon = EPSILON);
    assert_reproduces(&single, &coeffs, EPSILON);
}

#[test]
fn truncated_series_approximates_outline() {
    // Squared error of a truncated series is N times the energy of the
    // dropped terms, so keeping more terms strictly helps.
    let points = outline();
    let spectrum = Spectrum::from_contour(&points, TransformMode::Sequential);
    let full_error: f64 = spectrum
        .samples()
        .zip(&points)
        .map(|(s, p)| s.distance_to(*p).powi(2))
        .sum();
    let coarse_error: f64 = spectrum
        .truncated(Some(3))
        .samples()
        .zip(&points)
        .map(|(s, p)| s.distance_to(*p).powi(2))
        .sum();
    let finer_error: f64 = spectrum
        .truncated(Some(8))
        .samples()
        .zip(&points)
        .map(|(s, p)| s.distance_to(*p).powi(2))
        .sum();

    assert!(full_error < 1e-12, "full series error {full_error}");
    assert!(finer_error < coarse_error, "{finer_error} >= {coarse_error}");
}

#[test]
fn pen_receives_one_move_then_lines() {
    let spectrum = Spectrum::from_contour(&outline(), TransformMode::Parallel);
    let mut pen = RecordingPen::default();
    let drawn = trace(spectrum.samples(), &mut pen);

    assert_eq!(drawn, 14);
    let moves = pen
        .strokes
        .iter()
        .filter(|s| matches!(s, PenStroke::MoveTo(_)))
        .count();
    assert_eq!(moves, 1);
    assert!(matches!(pen.strokes[0], PenStroke::MoveTo(_)));
}

#[test]
fn spectrum_file_roundtrip_preserves_drawing() {
    let points = outline();
    let spectrum = Spectrum::from_contour(&points, TransformMode::Sequential).truncated(Some(5));
    let json = export_spectra(std::slice::from_ref(&spectrum)).unwrap();
    let back = import_spectra(&json).unwrap();

    for (a, b) in spectrum.samples().zip(back[0].samples()) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn oversampling_stays_on_the_curve() {
    // Sampling the diamond's series at 4× resolution traces the unit circle.
    let coeffs = transform(&diamond());
    for s in reconstruct_with_steps(&coeffs, 16) {
        assert_abs_diff_eq!(s.x.hypot(s.y), 1.0, epsilon = EPSILON);
    }
}

// ═══════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════

fn contour_strategy(max_len: usize) -> impl Strategy<Value = Vec<ContourPoint>> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..max_len)
        .prop_map(|pts| pts.into_iter().map(ContourPoint::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_roundtrip_fidelity(points in contour_strategy(48)) {
        let coeffs = rank(&transform(&points));
        let samples: Vec<_> = reconstruct(&coeffs).collect();
        prop_assert_eq!(samples.len(), points.len());
        for (s, p) in samples.iter().zip(&points) {
            prop_assert!(s.distance_to(*p) < 1e-7, "sample {:?} vs point {:?}", s, p);
        }
    }

    #[test]
    fn prop_coefficient_count_and_frequencies(points in contour_strategy(48)) {
        let coeffs = transform(&points);
        prop_assert_eq!(coeffs.len(), points.len());
        let freqs: Vec<usize> = coeffs.iter().map(|c| c.frequency).collect();
        prop_assert_eq!(freqs, (0..points.len()).collect::<Vec<_>>());
        prop_assert!(coeffs.iter().all(|c| c.magnitude >= 0.0));
        prop_assert!(coeffs
            .iter()
            .all(|c| c.phase > -std::f64::consts::PI && c.phase <= std::f64::consts::PI));
    }

    #[test]
    fn prop_ranking_is_sorted_permutation(points in contour_strategy(48)) {
        let coeffs = transform(&points);
        let ranked = rank(&coeffs);
        prop_assert_eq!(ranked.len(), coeffs.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].magnitude >= w[1].magnitude));

        let mut freqs: Vec<usize> = ranked.iter().map(|c| c.frequency).collect();
        freqs.sort_unstable();
        prop_assert_eq!(freqs, (0..coeffs.len()).collect::<Vec<_>>());
        for c in &ranked {
            prop_assert_eq!(*c, coeffs[c.frequency]);
        }

        // Equal magnitudes keep ascending frequency.
        for w in ranked.windows(2) {
            if w[0].magnitude == w[1].magnitude {
                prop_assert!(w[0].frequency < w[1].frequency);
            }
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(points in contour_strategy(96)) {
        prop_assert_eq!(transform(&points), transform_parallel(&points));
    }
}
