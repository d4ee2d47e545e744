//! Gaussian-derivative Hessian with per-pixel 2×2 eigen-decomposition.
//!
//! Pipeline per scale:
//! 1. Separable Gaussian blur, kernel radius `ceil(3σ)`, replicate borders.
//! 2. Central-difference first then second derivatives (one-sided at edges).
//! 3. `σ²` scale normalization of the second derivatives, so responses are
//!    comparable across scales.
//! 4. Eigenvalues of `[dxx dxy; dxy dyy]` at every pixel.
//!
//! The two output fields carry the eigenvalues in the order nalgebra returns
//! them; the vesselness response sorts by magnitude downstream.
use nalgebra::Matrix2;

use super::{EigenPair, HessianProvider};
use crate::error::VesselnessError;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Deterministic Gaussian-derivative Hessian provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianHessian;

impl HessianProvider for GaussianHessian {
    fn eigenvalues(&self, image: &ImageF32, sigma: f32) -> Result<EigenPair, VesselnessError> {
        if image.w == 0 || image.h == 0 {
            return Err(VesselnessError::InvalidParameter {
                name: "image",
                value: 0.0,
                constraint: "width and height must be positive",
            });
        }
        if !(sigma > 0.0) || !sigma.is_finite() {
            return Err(VesselnessError::InvalidParameter {
                name: "sigma",
                value: sigma as f64,
                constraint: "must be positive and finite",
            });
        }

        let smoothed = gaussian_smooth(image, sigma);
        let dx = gradient_x(&smoothed);
        let dy = gradient_y(&smoothed);
        let mut dxx = gradient_x(&dx);
        let mut dxy = gradient_y(&dx);
        let mut dyy = gradient_y(&dy);

        // gamma-normalization with gamma = 2
        let s2 = sigma * sigma;
        for img in [&mut dxx, &mut dxy, &mut dyy] {
            for row in img.rows_mut() {
                for v in row.iter_mut() {
                    *v *= s2;
                }
            }
        }

        let (w, h) = image.dims();
        let mut lambda1 = ImageF32::new(w, h);
        let mut lambda2 = ImageF32::new(w, h);
        for y in 0..h {
            let rxx = dxx.row(y);
            let rxy = dxy.row(y);
            let ryy = dyy.row(y);
            let out1 = lambda1.row_mut(y);
            let out2 = lambda2.row_mut(y);
            for x in 0..w {
                let hess = Matrix2::new(rxx[x], rxy[x], rxy[x], ryy[x]);
                let eig = hess.symmetric_eigen().eigenvalues;
                out1[x] = eig[0];
                out2[x] = eig[1];
            }
        }

        Ok(EigenPair { lambda1, lambda2 })
    }
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil().max(1.0) as usize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    kernel
}

/// Separable Gaussian blur with replicate borders.
fn gaussian_smooth(inp: &ImageF32, sigma: f32) -> ImageF32 {
    let kernel = gaussian_kernel(sigma);
    let radius = kernel.len() / 2;
    let (w, h) = inp.dims();

    // horizontal
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        let src = inp.row(y);
        let dst = tmp.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0;
            for (ki, &kv) in kernel.iter().enumerate() {
                let xi = (x + ki).saturating_sub(radius).min(w - 1);
                acc += src[xi] * kv;
            }
            dst[x] = acc;
        }
    }
    // vertical
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for (ki, &kv) in kernel.iter().enumerate() {
            let yi = (y + ki).saturating_sub(radius).min(h - 1);
            let src = tmp.row(yi);
            for x in 0..w {
                dst[x] += src[x] * kv;
            }
        }
    }
    out
}

/// Horizontal derivative: central differences, one-sided at the borders.
fn gradient_x(inp: &ImageF32) -> ImageF32 {
    let (w, h) = inp.dims();
    let mut out = ImageF32::new(w, h);
    if w < 2 {
        return out;
    }
    for y in 0..h {
        let src = inp.row(y);
        let dst = out.row_mut(y);
        dst[0] = src[1] - src[0];
        for x in 1..w - 1 {
            dst[x] = (src[x + 1] - src[x - 1]) * 0.5;
        }
        dst[w - 1] = src[w - 1] - src[w - 2];
    }
    out
}

/// Vertical derivative: central differences, one-sided at the borders.
fn gradient_y(inp: &ImageF32) -> ImageF32 {
    let (w, h) = inp.dims();
    let mut out = ImageF32::new(w, h);
    if h < 2 {
        return out;
    }
    for y in 0..h {
        let (ya, yb, scale) = if y == 0 {
            (0, 1, 1.0)
        } else if y == h - 1 {
            (h - 2, h - 1, 1.0)
        } else {
            (y - 1, y + 1, 0.5)
        };
        let above = inp.row(ya);
        let below = inp.row(yb);
        let dst = out.row_mut(y);
        for x in 0..w {
            dst[x] = (below[x] - above[x]) * scale;
        }
    }
    out
}
