//! Vesselness scoring: per-pixel response kernel and its robust statistics.
//!
//! `response` turns one scale's eigenvalue pair into a score map;
//! `stats` supplies the percentile/whisker machinery behind the adaptive
//! contrast threshold. The multiscale driver lives in [`crate::multiscale`].

pub mod response;
pub mod stats;

pub use response::single_scale_response;

use serde::Deserialize;

use crate::error::VesselnessError;
use crate::hessian::HessianProvider;
use crate::image::ImageF32;

/// Knobs of the vesselness response, shared across all scales of one run.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct VesselnessParams {
    /// Scales the adaptive contrast threshold: `c = k · Smax`.
    pub k: f32,
    /// Blob-suppression sensitivity in the `Rb` exponential.
    pub beta: f32,
    /// Normalize against the hard maximum of S instead of the Tukey whisker.
    pub use_hard_max: bool,
}

impl Default for VesselnessParams {
    fn default() -> Self {
        Self {
            k: 0.5,
            beta: 0.5,
            use_hard_max: false,
        }
    }
}

impl VesselnessParams {
    /// Fail-fast validation, run before any per-pixel work starts.
    pub fn validate(&self) -> Result<(), VesselnessError> {
        if !(self.k > 0.0) || !self.k.is_finite() {
            return Err(VesselnessError::InvalidParameter {
                name: "k",
                value: self.k as f64,
                constraint: "must be positive and finite",
            });
        }
        if !(self.beta > 0.0) || !self.beta.is_finite() {
            return Err(VesselnessError::InvalidParameter {
                name: "beta",
                value: self.beta as f64,
                constraint: "must be positive and finite",
            });
        }
        Ok(())
    }
}

/// Single-scale convenience entry point: one sigma, one map.
///
/// Degenerate form of [`crate::multiscale::multi_scale`] with a one-element
/// scale set, returning the map directly instead of a stack.
pub fn single_scale<P: HessianProvider>(
    image: &ImageF32,
    sigma: f32,
    params: &VesselnessParams,
    provider: &P,
) -> Result<ImageF32, VesselnessError> {
    params.validate()?;
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(VesselnessError::InvalidParameter {
            name: "sigma",
            value: sigma as f64,
            constraint: "must be positive and finite",
        });
    }
    let eigen = provider.eigenvalues(image, sigma)?;
    for got in [eigen.lambda1.dims(), eigen.lambda2.dims()] {
        if got != image.dims() {
            return Err(VesselnessError::DimensionMismatch {
                expected: image.dims(),
                got,
            });
        }
    }
    single_scale_response(&eigen, params)
}
