//! Owned single-channel f32 image in row-major layout, tightly packed.
//!
//! The sole pixel container used by the filter: eigenvalue fields, structure
//! magnitudes, and vesselness maps are all `ImageF32`. Buffers are immutable
//! once a filtering stage hands them on; every stage allocates its outputs
//! fresh.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Panics if `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must equal w * h");
        Self { w, h, data }
    }

    /// `(width, height)` pair, handy for dimension checks between stages.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Convert (x, y) to a linear index into `data`.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Get the pixel value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    /// Set the pixel value at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Maximum sample value, 0.0 for an empty image.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;
    use crate::image::{ImageView, ImageViewMut};

    #[test]
    fn rows_cover_every_pixel_once() {
        let mut img = ImageF32::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                img.set(x, y, (y * 3 + x) as f32);
            }
        }
        let collected: Vec<f32> = img.rows().flat_map(|r| r.iter().copied()).collect();
        assert_eq!(collected, img.data);
    }

    #[test]
    fn rows_mut_allows_in_place_edit() {
        let mut img = ImageF32::new(4, 3);
        for row in img.rows_mut() {
            for v in row.iter_mut() {
                *v = 2.5;
            }
        }
        assert!(img.data.iter().all(|&v| v == 2.5));
    }

    #[test]
    #[should_panic]
    fn from_vec_rejects_wrong_length() {
        let _ = ImageF32::from_vec(2, 2, vec![0.0; 3]);
    }
}
