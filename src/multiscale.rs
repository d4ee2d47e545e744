//! Multiscale aggregation: run the response across a scale set and stack the
//! per-scale maps in scale order, each labeled with its sigma.
//!
//! Per-scale computations are independent; with the `parallel` feature they
//! fan out across a rayon pool, and the collect preserves ScaleSet order
//! regardless of completion order. Any provider failure or dimension mismatch
//! aborts the whole request — a missing layer would silently corrupt the
//! labeled scale ordering downstream consumers rely on.
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::VesselnessError;
use crate::hessian::HessianProvider;
use crate::image::{ImageF32, ImageView};
use crate::scales::ScaleRange;
use crate::vesselness::{single_scale_response, VesselnessParams};

/// One scale's vesselness map with its sigma and display label.
#[derive(Clone, Debug)]
pub struct ScaleLayer {
    pub sigma: f32,
    /// Human-readable layer label, literally `"sigma = <value>"`.
    pub label: String,
    pub map: ImageF32,
}

impl ScaleLayer {
    /// Peak response of this layer, 0.0 for an empty map.
    pub fn max_response(&self) -> f32 {
        self.map.max_value()
    }
}

/// Per-scale vesselness maps in ascending scale order.
///
/// Created fresh per invocation; no state is shared across runs.
#[derive(Clone, Debug, Default)]
pub struct MultiScaleStack {
    pub layers: Vec<ScaleLayer>,
}

impl MultiScaleStack {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer labels in stack order.
    pub fn labels(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.label.as_str()).collect()
    }

    /// Sigmas in stack order (strictly increasing by construction).
    pub fn sigmas(&self) -> Vec<f32> {
        self.layers.iter().map(|l| l.sigma).collect()
    }
}

/// Run the vesselness filter over a geometric range of scales.
///
/// Parameters are validated up front; no scale is computed if any is invalid.
pub fn multi_scale<P: HessianProvider + Sync>(
    image: &ImageF32,
    range: &ScaleRange,
    params: &VesselnessParams,
    provider: &P,
) -> Result<MultiScaleStack, VesselnessError> {
    params.validate()?;
    let scales = range.scales()?;
    debug!(
        "vesselness: {} scale(s) over [{}, {}] on {}x{}",
        scales.len(),
        range.sigma0,
        range.sigma_max,
        image.width(),
        image.height()
    );

    let compute_layer = |&sigma: &f32| -> Result<ScaleLayer, VesselnessError> {
        let eigen = provider.eigenvalues(image, sigma)?;
        for got in [eigen.lambda1.dims(), eigen.lambda2.dims()] {
            if got != image.dims() {
                return Err(VesselnessError::DimensionMismatch {
                    expected: image.dims(),
                    got,
                });
            }
        }
        let map = single_scale_response(&eigen, params)?;
        debug!("vesselness: sigma={sigma} done");
        Ok(ScaleLayer {
            sigma,
            label: format!("sigma = {sigma}"),
            map,
        })
    };

    #[cfg(feature = "parallel")]
    let layers = scales
        .par_iter()
        .map(compute_layer)
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let layers = scales
        .iter()
        .map(compute_layer)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MultiScaleStack { layers })
}
