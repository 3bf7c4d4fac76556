//! Fourier epicycle engine.
//!
//! Turns an ordered, closed outline into its discrete Fourier series and
//! rebuilds a parametric curve from the rotating vectors ("epicycles") of
//! that series.
//!
//! Pipeline: [`transform`] → [`rank`] → [`reconstruct`] → [`Pen`].
//!
//! Zero I/O. Contour tracing and drawing belong to the caller.

pub mod coefficient;
pub mod constants;
pub mod error;
pub mod point;
pub mod rank;
pub mod reconstruct;
pub mod serde_compat;
pub mod spectrum;
pub mod transform;

pub use coefficient::FourierCoefficient;
pub use constants::{EPSILON, PARALLEL_THRESHOLD, WIRE_VERSION};
pub use error::{EpicycleError, Result};
pub use point::{ContourPoint, ParametricSample};
pub use rank::{rank, rank_in_place, truncate};
pub use reconstruct::{
    Pen, PenStroke, RecordingPen, Samples, Strokes, epicycle_chain, evaluate, reconstruct,
    reconstruct_with_steps, time_at, trace,
};
pub use serde_compat::{
    InputFile, export_contours, export_spectra, import_any, import_contours, import_spectra,
};
pub use spectrum::{Spectrum, spectra_for};
pub use transform::{TransformMode, transform, transform_parallel, transform_with};
