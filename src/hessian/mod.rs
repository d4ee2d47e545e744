//! Hessian eigenvalue stage: the injected collaborator of the filter core.
//!
//! The vesselness response only consumes two eigenvalue fields per scale; how
//! they are produced is behind [`HessianProvider`] so the numeric contract can
//! be tested with synthetic fields. [`GaussianHessian`] is the shipped
//! implementation (separable Gaussian smoothing + central-difference second
//! derivatives + 2×2 symmetric eigen-decomposition).
//!
//! Providers make no ordering promise between the two fields; the response
//! sorts by magnitude itself.

pub mod gaussian;

pub use gaussian::GaussianHessian;

use crate::error::VesselnessError;
use crate::image::ImageF32;

/// Two Hessian eigenvalue fields of identical dimensions for one scale.
#[derive(Clone, Debug)]
pub struct EigenPair {
    pub lambda1: ImageF32,
    pub lambda2: ImageF32,
}

impl EigenPair {
    /// Pair two eigenvalue fields, rejecting mismatched dimensions.
    pub fn new(lambda1: ImageF32, lambda2: ImageF32) -> Result<Self, VesselnessError> {
        if lambda1.dims() != lambda2.dims() {
            return Err(VesselnessError::DimensionMismatch {
                expected: lambda1.dims(),
                got: lambda2.dims(),
            });
        }
        Ok(Self { lambda1, lambda2 })
    }

    /// Shared `(width, height)` of both fields.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        self.lambda1.dims()
    }
}

/// Strategy computing the Hessian eigenvalue fields of a smoothed image.
///
/// Implementations must be deterministic for fixed inputs and must return
/// fields with the same dimensions as the input image.
pub trait HessianProvider {
    fn eigenvalues(&self, image: &ImageF32, sigma: f32) -> Result<EigenPair, VesselnessError>;
}

/// Closures act as providers, which keeps tests free of boilerplate types.
impl<F> HessianProvider for F
where
    F: Fn(&ImageF32, f32) -> Result<EigenPair, VesselnessError>,
{
    fn eigenvalues(&self, image: &ImageF32, sigma: f32) -> Result<EigenPair, VesselnessError> {
        self(image, sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eigen_pair_rejects_mismatched_fields() {
        let err = EigenPair::new(ImageF32::new(4, 4), ImageF32::new(4, 3)).unwrap_err();
        assert_eq!(
            err,
            VesselnessError::DimensionMismatch {
                expected: (4, 4),
                got: (4, 3),
            }
        );
    }

    #[test]
    fn closure_acts_as_provider() {
        let provider = |img: &ImageF32, _sigma: f32| {
            EigenPair::new(ImageF32::new(img.w, img.h), ImageF32::new(img.w, img.h))
        };
        let pair = provider.eigenvalues(&ImageF32::new(5, 3), 1.0).unwrap();
        assert_eq!(pair.dims(), (5, 3));
    }
}
