//! Background image loading

use hanami_core::{HanamiError, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

/// Decode the background image and scale it to the playfield. Called once
/// at startup; a failure here is fatal — there is no scene without it.
pub fn load_background<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| {
        HanamiError::AssetError(format!("background '{}': {e}", path.display()))
    })?;
    Ok(prepare(img, width, height))
}

fn prepare(img: DynamicImage, width: u32, height: u32) -> Vec<u8> {
    img.resize_exact(width, height, FilterType::Triangle)
        .to_rgba8()
        .into_raw()
}
