//! Single-scale vesselness response from a pair of Hessian eigenvalue fields.
//!
//! Per pixel the two eigenvalues are magnitude-sorted with signs preserved;
//! a positive dominant eigenvalue (locally convex, not a bright ridge on a
//! dark background) scores 0, otherwise the score is
//!
//! `v = exp(−Rb²/(2β²)) · (1 − exp(−S²/(2c²)))`
//!
//! with `Rb = λ1/λ2` suppressing blobs, `S = sqrt(λ1² + λ2²)` the structure
//! magnitude, and `c = k · Smax` an adaptive contrast threshold computed once
//! over the whole field. Outputs lie in [0, 1).
use super::stats;
use super::VesselnessParams;
use crate::error::VesselnessError;
use crate::hessian::EigenPair;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Compute the vesselness map for one scale.
///
/// Pure function of its inputs. A flat structure field (`Smax == 0`) yields
/// an all-zero map rather than an error.
pub fn single_scale_response(
    eigen: &EigenPair,
    params: &VesselnessParams,
) -> Result<ImageF32, VesselnessError> {
    params.validate()?;
    let (w, h) = eigen.lambda1.dims();
    if eigen.lambda2.dims() != (w, h) {
        return Err(VesselnessError::DimensionMismatch {
            expected: (w, h),
            got: eigen.lambda2.dims(),
        });
    }
    if w == 0 || h == 0 {
        return Err(VesselnessError::InvalidParameter {
            name: "eigen",
            value: 0.0,
            constraint: "field dimensions must be positive",
        });
    }

    // Structure magnitude over the raw (unsorted) eigenvalues.
    let mut s = vec![0.0f32; w * h];
    for y in 0..h {
        let r1 = eigen.lambda1.row(y);
        let r2 = eigen.lambda2.row(y);
        let out = &mut s[y * w..(y + 1) * w];
        for x in 0..w {
            out[x] = (r1[x] * r1[x] + r2[x] * r2[x]).sqrt();
        }
    }

    let smax = if params.use_hard_max {
        stats::sample_max(&s)
    } else {
        stats::tukey_upper_whisker(&s)
    };

    let mut map = ImageF32::new(w, h);
    if smax <= 0.0 {
        // Flat field: nothing to normalize against, no vesselness anywhere.
        return Ok(map);
    }

    let c = params.k * smax;
    let inv_two_beta2 = 1.0 / (2.0 * params.beta * params.beta);
    let inv_two_c2 = 1.0 / (2.0 * c * c);
    for y in 0..h {
        let r1 = eigen.lambda1.row(y);
        let r2 = eigen.lambda2.row(y);
        let s_row = &s[y * w..(y + 1) * w];
        let out = map.row_mut(y);
        for x in 0..w {
            out[x] = pixel_response(r1[x], r2[x], s_row[x], inv_two_beta2, inv_two_c2);
        }
    }
    Ok(map)
}

#[inline]
fn pixel_response(l1: f32, l2: f32, s: f32, inv_two_beta2: f32, inv_two_c2: f32) -> f32 {
    // Magnitude sort with signs preserved.
    let (lam1, lam2) = if l2.abs() < l1.abs() { (l2, l1) } else { (l1, l2) };
    if lam2 > 0.0 {
        // Locally convex: inconsistent with a bright ridge on dark background.
        return 0.0;
    }
    if lam2 == 0.0 {
        // Both eigenvalues vanish; the ratio is undefined there.
        return 0.0;
    }
    let rb = lam1 / lam2;
    (-rb * rb * inv_two_beta2).exp() * (1.0 - (-s * s * inv_two_c2).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_pair(w: usize, h: usize, l1: f32, l2: f32) -> EigenPair {
        EigenPair {
            lambda1: ImageF32::from_vec(w, h, vec![l1; w * h]),
            lambda2: ImageF32::from_vec(w, h, vec![l2; w * h]),
        }
    }

    #[test]
    fn convex_pixels_score_exactly_zero() {
        // Dominant-magnitude eigenvalue positive → 0, regardless of the other.
        let eigen = constant_pair(4, 4, -0.5, 2.0);
        let map = single_scale_response(&eigen, &VesselnessParams::default()).unwrap();
        assert!(map.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_dominant_eigenvalue_scores_zero() {
        // One pixel with both eigenvalues zero inside an otherwise active
        // field: the ratio guard must yield 0 there, not NaN.
        let mut eigen = constant_pair(4, 4, 0.0, -1.0);
        eigen.lambda2.set(1, 1, 0.0);
        let map = single_scale_response(&eigen, &VesselnessParams::default()).unwrap();
        assert_eq!(map.get(1, 1), 0.0);
        assert!(map.get(0, 0) > 0.0);
        assert!(map.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn output_stays_in_unit_interval() {
        let mut lambda1 = ImageF32::new(8, 8);
        let mut lambda2 = ImageF32::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                lambda1.set(x, y, (x as f32 - 4.0) * 0.1);
                lambda2.set(x, y, -(y as f32 + 1.0));
            }
        }
        let eigen = EigenPair { lambda1, lambda2 };
        for use_hard_max in [false, true] {
            let params = VesselnessParams {
                use_hard_max,
                ..Default::default()
            };
            let map = single_scale_response(&eigen, &params).unwrap();
            for &v in map.as_slice() {
                assert!((0.0..1.0).contains(&v), "out of range: {v}");
            }
        }
    }

    #[test]
    fn swapping_eigenvalue_fields_changes_nothing() {
        let mut lambda1 = ImageF32::new(6, 6);
        let mut lambda2 = ImageF32::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                lambda1.set(x, y, -(x as f32) * 0.3);
                lambda2.set(x, y, (y as f32) * 0.2 - 1.5);
            }
        }
        let params = VesselnessParams::default();
        let forward = single_scale_response(
            &EigenPair {
                lambda1: lambda1.clone(),
                lambda2: lambda2.clone(),
            },
            &params,
        )
        .unwrap();
        let swapped = single_scale_response(
            &EigenPair {
                lambda1: lambda2,
                lambda2: lambda1,
            },
            &params,
        )
        .unwrap();
        assert_eq!(forward, swapped);
    }

    #[test]
    fn response_decreases_with_anisotropy_ratio() {
        // 1x1 fields pin Smax to S, so c is identical across ratios and only
        // the Rb term varies.
        let s = 5.0f32;
        let params = VesselnessParams {
            use_hard_max: true,
            ..Default::default()
        };
        let mut previous = f32::INFINITY;
        for ratio in [0.0f32, 0.2, 0.4, 0.6, 0.8] {
            let lam2 = -s / (1.0 + ratio * ratio).sqrt();
            let lam1 = ratio * lam2;
            let eigen = constant_pair(1, 1, lam1, lam2);
            let v = single_scale_response(&eigen, &params).unwrap().get(0, 0);
            assert!(
                v < previous,
                "expected strict decrease, ratio={ratio} gave {v} after {previous}"
            );
            previous = v;
        }
    }

    #[test]
    fn hard_max_yields_weaker_response_on_outlier_field() {
        // Uniform ridge-like background with one huge-magnitude pixel. The
        // hard maximum chases the outlier, inflating c and deflating scores.
        let w = 10;
        let h = 10;
        let mut lambda2 = ImageF32::from_vec(w, h, vec![-1.0; w * h]);
        lambda2.set(0, 0, -100.0);
        let lambda1 = ImageF32::new(w, h);
        let eigen = EigenPair { lambda1, lambda2 };

        let robust = single_scale_response(
            &eigen,
            &VesselnessParams {
                use_hard_max: false,
                ..Default::default()
            },
        )
        .unwrap();
        let hard = single_scale_response(
            &eigen,
            &VesselnessParams {
                use_hard_max: true,
                ..Default::default()
            },
        )
        .unwrap();

        let probe = (5, 5); // an ordinary background pixel
        assert!(
            hard.get(probe.0, probe.1) < robust.get(probe.0, probe.1),
            "hard={} robust={}",
            hard.get(probe.0, probe.1),
            robust.get(probe.0, probe.1)
        );
    }

    #[test]
    fn flat_field_yields_all_zero_map() {
        // Constant S with the whisker degenerating to that constant still
        // produces finite output; all-zero S short-circuits entirely.
        let eigen = constant_pair(5, 5, 0.0, 0.0);
        let map = single_scale_response(&eigen, &VesselnessParams::default()).unwrap();
        assert!(map.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let eigen = constant_pair(2, 2, 0.0, -1.0);
        for params in [
            VesselnessParams {
                k: 0.0,
                ..Default::default()
            },
            VesselnessParams {
                k: -1.0,
                ..Default::default()
            },
            VesselnessParams {
                beta: 0.0,
                ..Default::default()
            },
        ] {
            assert!(
                matches!(
                    single_scale_response(&eigen, &params),
                    Err(VesselnessError::InvalidParameter { .. })
                ),
                "params {params:?} should be rejected"
            );
        }
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let eigen = EigenPair {
            lambda1: ImageF32::new(3, 3),
            lambda2: ImageF32::new(3, 4),
        };
        assert!(matches!(
            single_scale_response(&eigen, &VesselnessParams::default()),
            Err(VesselnessError::DimensionMismatch { .. })
        ));
    }
}
