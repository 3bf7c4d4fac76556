//! JSON wire format for contour and spectrum files.
//!
//! Contours travel as `[x, y]` pairs. Coefficients use the field names
//! `magnitude`, `phase` and `freq`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coefficient::FourierCoefficient;
use crate::constants::WIRE_VERSION;
use crate::error::{EpicycleError, Result};
use crate::point::ContourPoint;
use crate::rank::rank_in_place;
use crate::spectrum::Spectrum;

// --- Wire format types ---

#[derive(Serialize, Deserialize, Debug)]
pub struct WireContours {
    #[serde(default)]
    pub version: String,
    pub contours: Vec<Vec<ContourPoint>>,
}

/// Contour files come either wrapped with a version or as a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContourInput {
    Wrapped(WireContours),
    Bare(Vec<Vec<ContourPoint>>),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireSpectra {
    #[serde(default)]
    pub version: String,
    pub spectra: Vec<WireSpectrum>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireSpectrum {
    /// Length of the source contour.
    pub points: usize,
    pub coefficients: Vec<FourierCoefficient>,
}

/// Either kind of input file, told apart by shape.
#[derive(Debug)]
pub enum InputFile {
    Contours(Vec<Vec<ContourPoint>>),
    Spectra(Vec<Spectrum>),
}

// --- Conversion ---

impl WireSpectrum {
    fn from_spectrum(spectrum: &Spectrum) -> Self {
        Self {
            points: spectrum.len(),
            coefficients: spectrum.coefficients().to_vec(),
        }
    }

    /// Check the coefficient invariants and convert. Phases are wrapped into
    /// (−π, π] and the coefficients re-ranked, since a hand-edited file
    /// need not list them largest first.
    fn into_spectrum(mut self, index: usize) -> Result<Spectrum> {
        if self.coefficients.len() > self.points {
            return Err(EpicycleError::InvalidData(format!(
                "spectrum {index}: {} coefficients for a {}-point contour",
                self.coefficients.len(),
                self.points
            )));
        }
        let mut seen = HashSet::with_capacity(self.coefficients.len());
        for c in &self.coefficients {
            if c.frequency >= self.points {
                return Err(EpicycleError::InvalidData(format!(
                    "spectrum {index}: frequency {} out of range for {} points",
                    c.frequency, self.points
                )));
            }
            if !seen.insert(c.frequency) {
                return Err(EpicycleError::InvalidData(format!(
                    "spectrum {index}: duplicate frequency {}",
                    c.frequency
                )));
            }
            if c.magnitude < 0.0 {
                return Err(EpicycleError::InvalidData(format!(
                    "spectrum {index}: negative magnitude {} at frequency {}",
                    c.magnitude, c.frequency
                )));
            }
        }
        for c in &mut self.coefficients {
            *c = c.with_normalized_phase();
        }
        rank_in_place(&mut self.coefficients);
        Ok(Spectrum::from_ranked(self.points, self.coefficients))
    }
}

// --- Public API ---

/// Parse a contour file.
pub fn import_contours(json: &str) -> Result<Vec<Vec<ContourPoint>>> {
    let input: ContourInput = serde_json::from_str(json)?;
    Ok(match input {
        ContourInput::Wrapped(wire) => wire.contours,
        ContourInput::Bare(contours) => contours,
    })
}

pub fn export_contours(contours: &[Vec<ContourPoint>]) -> Result<String> {
    let wire = WireContours {
        version: WIRE_VERSION.to_string(),
        contours: contours.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Parse and validate a spectrum file.
pub fn import_spectra(json: &str) -> Result<Vec<Spectrum>> {
    let wire: WireSpectra = serde_json::from_str(json)?;
    wire.spectra
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.into_spectrum(i))
        .collect()
}

pub fn export_spectra(spectra: &[Spectrum]) -> Result<String> {
    let wire = WireSpectra {
        version: WIRE_VERSION.to_string(),
        spectra: spectra.iter().map(WireSpectrum::from_spectrum).collect(),
    };
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Parse a file that may hold either contours or spectra.
pub fn import_any(json: &str) -> Result<InputFile> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("spectra").is_some() {
        return Ok(InputFile::Spectra(import_spectra(json)?));
    }
    Ok(InputFile::Contours(import_contours(json)?))
}
