//! I/O helpers for masks, distance maps and JSON.
//!
//! - `load_mask_image`: read a PNG/TIFF/BMP/PGM into an owned 8-bit mask.
//! - `save_distance_map`: write an `ImageF32` distance map to a 16-bit PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageView, MaskU8};
use image::{ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_mask_image(path: &Path) -> Result<MaskU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    MaskU8::from_vec(width, height, img.into_raw())
        .ok_or_else(|| format!("Decoded buffer of {} has unexpected size", path.display()))
}

/// Save a distance map to a 16-bit grayscale PNG, truncating values to whole
/// pixels and clamping to `u16::MAX`.
pub fn save_distance_map(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, u16::MAX as f32);
            out.put_pixel(x as u32, y as u32, Luma([v as u16]));
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
