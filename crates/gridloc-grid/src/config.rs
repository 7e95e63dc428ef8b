//! Grid generation configuration, validation, and error types.
//!
//! [`GenerateConfig`] describes a bounding-box lattice that is clipped to a
//! region and then padded with neighbour rings. [`validate()`](GenerateConfig::validate)
//! checks it before any points are generated.

use crate::grid::Grid;
use gridloc_region::Region;
use std::error::Error;
use std::fmt;

// ── GenerateConfig ─────────────────────────────────────────────────

/// Parameters for [`GenerateConfig::generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    /// Minimum latitude (inclusive). Default: -48.
    pub lat_min: f64,
    /// Maximum latitude (exclusive). Default: -34.
    pub lat_max: f64,
    /// Minimum longitude (inclusive). Default: 166.
    pub lon_min: f64,
    /// Maximum longitude (exclusive). Default: 179.
    pub lon_max: f64,
    /// Lattice spacing in degrees. Default: 0.1.
    pub step: f64,
    /// Number of neighbour rings added after clipping. Default: 2.
    pub neighbours: usize,
}

impl Default for GenerateConfig {
    /// Mainland New Zealand at 0.1 degrees with two neighbour rings.
    fn default() -> Self {
        Self {
            lat_min: -48.0,
            lat_max: -34.0,
            lon_min: 166.0,
            lon_max: 179.0,
            step: 0.1,
            neighbours: 2,
        }
    }
}

impl GenerateConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep { value: self.step });
        }
        check_axis("latitude", self.lat_min, self.lat_max)?;
        check_axis("longitude", self.lon_min, self.lon_max)?;
        Ok(())
    }

    /// Build the bounding-box lattice, clip it to `clip`, and add
    /// `neighbours` rings of padding.
    pub fn generate(&self, clip: &Region) -> Result<Grid, ConfigError> {
        self.validate()?;
        let grid = Grid::for_bounds(self.lat_min, self.lat_max, self.lon_min, self.lon_max, self.step)
            .intersection(clip)
            .expand(self.neighbours);
        tracing::info!(
            region = clip.name(),
            step = self.step,
            neighbours = self.neighbours,
            points = grid.len(),
            "grid generated"
        );
        Ok(grid)
    }
}

fn check_axis(axis: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(ConfigError::InvalidRange { axis, min, max });
    }
    Ok(())
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GenerateConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Step is zero, negative, or not finite.
    InvalidStep {
        /// The invalid value.
        value: f64,
    },
    /// An axis range is empty, inverted, or not finite.
    InvalidRange {
        /// `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { value } => {
                write!(f, "step must be finite and positive, got {value}")
            }
            Self::InvalidRange { axis, min, max } => {
                write!(f, "invalid {axis} range [{min}, {max})")
            }
        }
    }
}

impl Error for ConfigError {}
