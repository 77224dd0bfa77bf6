//! I/O helpers for masks, label rasters and JSON.
//!
//! - `load_mask`: read a PNG/JPEG/etc., convert to grayscale and binarize.
//! - `save_mask_png`: write a binary mask to a grayscale PNG.
//! - `save_labels_png`: write a label raster to an RGB PNG, one deterministic
//!   color per road id (visualization only, never used for identity).
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::{LabelRaster, Mask, FOREGROUND};
use crate::types::RoadId;
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit grayscale and binarize:
/// values strictly above `threshold` become foreground.
pub fn load_mask(path: &Path, threshold: u8) -> Result<Mask, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| if v > threshold { FOREGROUND } else { 0 })
        .collect();
    Ok(Mask::from_raw(w, h, data))
}

/// Save a binary mask to a grayscale PNG.
pub fn save_mask_png(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for row in 0..mask.h {
        for col in 0..mask.w {
            let v = if mask.is_fg(row, col) { FOREGROUND } else { 0 };
            out.put_pixel(col as u32, row as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Deterministic display color for a road id, each channel in [50, 250).
///
/// Presentation only: two roads may hash to the same color, which is fine
/// because identity lives in the label raster, not the pixels' colors.
pub fn color_for(id: RoadId) -> [u8; 3] {
    let mut x = id.0.wrapping_mul(0x9e37_79b9);
    let mut channel = || {
        x ^= x >> 16;
        x = x.wrapping_mul(0x85eb_ca6b);
        (50 + (x % 200)) as u8
    };
    [channel(), channel(), channel()]
}

/// Save a label raster to an RGB PNG, unlabeled pixels black.
pub fn save_labels_png(labels: &LabelRaster, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(labels.w as u32, labels.h as u32);
    for row in 0..labels.h {
        for col in 0..labels.w {
            let rgb = match labels.road_at(row, col) {
                Some(id) => color_for(id),
                None => [0, 0, 0],
            };
            out.put_pixel(col as u32, row as u32, Rgb(rgb));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_deterministic_and_in_range() {
        let a = color_for(RoadId(1));
        let b = color_for(RoadId(1));
        assert_eq!(a, b);
        for ch in color_for(RoadId(12345)) {
            assert!((50..250).contains(&ch));
        }
    }
}
