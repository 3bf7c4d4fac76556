//! Visual priority of epicycles: largest radius first.
//!
//! Ordering never changes the reconstructed geometry, since the
//! reconstruction sums every term. It only decides which vectors a
//! progressive drawing shows first and which survive truncation.

use crate::coefficient::FourierCoefficient;

/// Sort by magnitude, descending.
///
/// The sort is stable, so equal magnitudes keep their incoming order
/// (ascending frequency when fed straight from the transform). NaN
/// magnitudes sort after every finite one.
pub fn rank(coefficients: &[FourierCoefficient]) -> Vec<FourierCoefficient> {
    let mut ranked = coefficients.to_vec();
    rank_in_place(&mut ranked);
    ranked
}

/// In-place variant of [`rank`].
pub fn rank_in_place(coefficients: &mut [FourierCoefficient]) {
    coefficients.sort_by(|a, b| descending(a.magnitude, b.magnitude));
}

/// Keep the `top_k` largest of an already ranked sequence. `None`, or a
/// `top_k` past the end, keeps everything.
pub fn truncate(ranked: &[FourierCoefficient], top_k: Option<usize>) -> &[FourierCoefficient] {
    match top_k {
        Some(k) if k < ranked.len() => &ranked[..k],
        _ => ranked,
    }
}

fn descending(a: f64, b: f64) -> std::cmp::Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
