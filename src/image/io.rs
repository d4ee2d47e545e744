//! I/O helpers for grayscale images and JSON, used by the demo binary.
//!
//! - `load_grayscale_f32`: read a PNG/JPEG into an `ImageF32` scaled to [0,1].
//! - `save_grayscale_f32`: write an `ImageF32` to a grayscale PNG, clamped.
//! - `save_normalized_f32`: same, but rescaled so the peak value maps to 255.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageView};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to grayscale, and scale samples to [0,1].
pub fn load_grayscale_f32(path: &Path) -> Result<ImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img.into_raw().iter().map(|&v| v as f32 / 255.0).collect();
    Ok(ImageF32::from_vec(w, h, data))
}

/// Save a float image to a grayscale PNG, clamping values to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float image rescaled so its maximum maps to white.
///
/// Vesselness maps often peak well below 1; this keeps faint layers visible.
/// A flat (all-zero) image is written as-is.
pub fn save_normalized_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    let peak = image
        .rows()
        .flat_map(|r| r.iter().copied())
        .fold(0.0f32, f32::max);
    if peak <= 0.0 {
        return save_grayscale_f32(image, path);
    }
    let mut scaled = image.clone();
    for v in scaled.data.iter_mut() {
        *v /= peak;
    }
    save_grayscale_f32(&scaled, path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
