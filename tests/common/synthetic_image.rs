use vessel_filter::image::ImageF32;
use vessel_filter::EigenPair;

/// Bright horizontal line with a Gaussian cross-section on a dark background.
pub fn ridge_image(width: usize, height: usize, ridge_y: usize, ridge_sigma: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        let d = y as f32 - ridge_y as f32;
        let v = (-d * d / (2.0 * ridge_sigma * ridge_sigma)).exp();
        for x in 0..width {
            img.set(x, y, v);
        }
    }
    img
}

/// Eigenvalue pair with constant fields, sized like `image`.
pub fn constant_eigens(width: usize, height: usize, l1: f32, l2: f32) -> EigenPair {
    let lambda1 = ImageF32::from_vec(width, height, vec![l1; width * height]);
    let lambda2 = ImageF32::from_vec(width, height, vec![l2; width * height]);
    EigenPair::new(lambda1, lambda2).expect("matching dimensions")
}
