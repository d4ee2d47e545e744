#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod hessian;
pub mod image;
pub mod multiscale;
pub mod scales;
pub mod types;
pub mod vesselness;

// --- High-level re-exports -------------------------------------------------

// Main entry points: single- and multiscale filtering.
pub use crate::multiscale::{multi_scale, MultiScaleStack, ScaleLayer};
pub use crate::vesselness::{single_scale, single_scale_response, VesselnessParams};

// Collaborator seam and its shipped implementation.
pub use crate::hessian::{EigenPair, GaussianHessian, HessianProvider};

pub use crate::error::VesselnessError;
pub use crate::scales::{width_to_sigma, ScaleRange};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use vessel_filter::prelude::*;
///
/// let image = ImageF32::new(128, 128);
/// let stack = multi_scale(
///     &image,
///     &ScaleRange::default(),
///     &VesselnessParams::default(),
///     &GaussianHessian,
/// )
/// .expect("vesselness");
/// println!("{} layer(s)", stack.len());
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{
        multi_scale, single_scale, GaussianHessian, HessianProvider, MultiScaleStack, ScaleRange,
        VesselnessParams,
    };
}
