//! Convenience re-exports of the types most callers touch.

pub use crate::error::VesselnessError;
pub use crate::hessian::EigenPair;
pub use crate::image::ImageF32;
pub use crate::multiscale::{MultiScaleStack, ScaleLayer};
pub use crate::scales::ScaleRange;
pub use crate::vesselness::VesselnessParams;
