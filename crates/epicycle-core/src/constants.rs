/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// Contour length at which `TransformMode::Auto` switches to the parallel DFT.
/// Below this the rayon fan-out costs more than the O(N²) loop it splits.
pub const PARALLEL_THRESHOLD: usize = 512;

/// Version tag written into exported contour and spectrum files.
pub const WIRE_VERSION: &str = "0.1.0";
