//! Robust statistics over the structure-magnitude field.
//!
//! The response normalizes contrast against a single scalar per scale: either
//! the hard maximum of S or the Tukey upper whisker `Q3 + 1.5·(Q3 − Q1)`. The
//! whisker ignores bright outlier ridges, which makes it a better noise-floor
//! estimate on images with a few saturated structures.

/// Interpolated percentile of pre-sorted samples.
///
/// Linear interpolation between closest ranks (`rank = p/100 · (n − 1)`).
/// `sorted` must be ascending and non-empty; `p` is clamped to [0, 100].
pub fn percentile_sorted(sorted: &[f32], p: f64) -> f32 {
    debug_assert!(!sorted.is_empty(), "percentile of empty sample set");
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Tukey upper whisker of an unordered sample set: `Q3 + 1.5·(Q3 − Q1)`.
pub fn tukey_upper_whisker(samples: &[f32]) -> f32 {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f32::total_cmp);
    let q1 = percentile_sorted(&sorted, 25.0);
    let q3 = percentile_sorted(&sorted, 75.0);
    q3 + 1.5 * (q3 - q1)
}

/// Hard maximum of a non-negative sample set, 0.0 when empty.
pub fn sample_max(samples: &[f32]) -> f32 {
    samples.iter().copied().fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(percentile_sorted(&sorted, 100.0), 4.0);
        // rank = 0.5 * 3 = 1.5 → midway between 2 and 3
        assert!((percentile_sorted(&sorted, 50.0) - 2.5).abs() < 1e-6);
        // rank = 0.25 * 3 = 0.75
        assert!((percentile_sorted(&sorted, 25.0) - 1.75).abs() < 1e-6);
    }

    #[test]
    fn percentile_of_single_sample() {
        assert_eq!(percentile_sorted(&[7.5], 25.0), 7.5);
        assert_eq!(percentile_sorted(&[7.5], 90.0), 7.5);
    }

    #[test]
    fn whisker_ignores_single_outlier() {
        let mut samples = vec![1.0f32; 99];
        samples.push(1000.0);
        let whisker = tukey_upper_whisker(&samples);
        let hard = sample_max(&samples);
        assert!(
            whisker < 10.0,
            "whisker should stay near the bulk, got {whisker}"
        );
        assert_eq!(hard, 1000.0);
    }

    #[test]
    fn whisker_of_constant_samples_is_the_constant() {
        let samples = vec![3.0f32; 16];
        assert!((tukey_upper_whisker(&samples) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn max_of_empty_is_zero() {
        assert_eq!(sample_max(&[]), 0.0);
    }
}
