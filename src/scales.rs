//! Geometric scale-range generation for the multiscale filter.
//!
//! Scales are spaced logarithmically so that coarser scales are sampled less
//! densely, matching the self-similar response of ridge structures across
//! scale: `m = floor(q · log2(sigma_max/sigma0)) + 1` scales, the i-th equal
//! to `sigma0 · 2^(i/q)` with `q` samples per octave (doubling of sigma).
use serde::Deserialize;

use crate::error::VesselnessError;

/// Requested sigma range and per-octave sampling density.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ScaleRange {
    /// Base (finest) smoothing scale, in pixels.
    pub sigma0: f32,
    /// Coarsest scale; the generated set never exceeds it.
    pub sigma_max: f32,
    /// Scales sampled per doubling of sigma.
    pub steps_per_octave: u32,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            sigma0: 1.0,
            sigma_max: 4.0,
            steps_per_octave: 2,
        }
    }
}

impl ScaleRange {
    /// Degenerate range producing exactly one scale.
    pub fn single(sigma: f32) -> Self {
        Self {
            sigma0: sigma,
            sigma_max: sigma,
            steps_per_octave: 1,
        }
    }

    /// Fail-fast validation, run before any scale is computed.
    pub fn validate(&self) -> Result<(), VesselnessError> {
        if !(self.sigma0 > 0.0) || !self.sigma0.is_finite() {
            return Err(VesselnessError::InvalidParameter {
                name: "sigma0",
                value: self.sigma0 as f64,
                constraint: "must be positive and finite",
            });
        }
        if !(self.sigma_max >= self.sigma0) || !self.sigma_max.is_finite() {
            return Err(VesselnessError::InvalidParameter {
                name: "sigma_max",
                value: self.sigma_max as f64,
                constraint: "must be finite and >= sigma0",
            });
        }
        if self.steps_per_octave < 1 {
            return Err(VesselnessError::InvalidParameter {
                name: "steps_per_octave",
                value: self.steps_per_octave as f64,
                constraint: "must be >= 1",
            });
        }
        Ok(())
    }

    /// Generate the strictly increasing scale set.
    ///
    /// Evaluated in f64 so exact-octave ranges do not lose a scale to f32
    /// rounding inside the `floor`.
    pub fn scales(&self) -> Result<Vec<f32>, VesselnessError> {
        self.validate()?;
        let q = self.steps_per_octave as f64;
        let sigma0 = self.sigma0 as f64;
        let octaves = (self.sigma_max as f64 / sigma0).log2();
        let m = (q * octaves).floor() as usize + 1;
        Ok((0..m)
            .map(|i| (sigma0 * (i as f64 / q).exp2()) as f32)
            .collect())
    }
}

/// Smoothing scale tuned for a vessel of the given width in pixels:
/// `sigma = 0.5 + width / (2·sqrt(3))`.
pub fn width_to_sigma(width: f32) -> f32 {
    0.5 + width / (2.0 * 3.0_f32.sqrt())
}
