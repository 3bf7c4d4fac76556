//! `epicycle.toml` configuration.
//!
//! Lookup order: `--config`, `EPICYCLE_CONFIG`, `./epicycle.toml`, built-in
//! defaults. Every field is optional in the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use epicycle_core::{ContourPoint, PARALLEL_THRESHOLD, ParametricSample, TransformMode};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "EPICYCLE_CONFIG";
pub const CONFIG_FILE: &str = "epicycle.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub transform: TransformConfig,
    pub render: RenderConfig,
}

/// Screen geometry. Contour tracers report pixels with y pointing down;
/// the math space has its origin at (`origin_x`, `origin_y`) and y up.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub origin_x: f64,
    pub origin_y: f64,
    /// Map input pixels into math space on import.
    pub recenter: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            origin_x: 300.0,
            origin_y: 300.0,
            recenter: true,
        }
    }
}

impl CanvasConfig {
    pub fn to_math(&self, pixel: ContourPoint) -> ContourPoint {
        ContourPoint::new(pixel.x - self.origin_x, self.origin_y - pixel.y)
    }

    pub fn to_screen(&self, point: ParametricSample) -> (f64, f64) {
        (point.x + self.origin_x, self.origin_y - point.y)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Force the parallel DFT regardless of contour length.
    pub parallel: bool,
    /// Contour length at which the DFT goes parallel on its own.
    pub parallel_threshold: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Epicycles kept per contour; 0 keeps all.
    pub top_k: usize,
    pub stroke: String,
    pub stroke_width: f64,
    pub background: String,
    /// Join the last sample back to the first.
    pub close_path: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            top_k: 0,
            stroke: "black".to_string(),
            stroke_width: 1.0,
            background: "white".to_string(),
            close_path: false,
        }
    }
}

impl Config {
    /// Resolve and load the configuration file, falling back to defaults
    /// when none is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Scheduling for the DFT; `force_parallel` comes from the CLI flag.
    pub fn transform_mode(&self, force_parallel: bool) -> TransformMode {
        if force_parallel || self.transform.parallel {
            TransformMode::Parallel
        } else {
            TransformMode::Auto {
                threshold: self.transform.parallel_threshold,
            }
        }
    }

    /// Truncation for rendering; a CLI value wins over the file.
    pub fn top_k(&self, cli: Option<usize>) -> Option<usize> {
        match cli.unwrap_or(self.render.top_k) {
            0 => None,
            k => Some(k),
        }
    }
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(env) = std::env::var(CONFIG_ENV)
        && !env.is_empty()
    {
        return Some(PathBuf::from(env));
    }
    let local = PathBuf::from(CONFIG_FILE);
    local.is_file().then_some(local)
}
