//! PNG decoding through the `image` crate.

use anyhow::{Context, Result};
use roster_shared::Texture;

use super::ImageDecoder;

/// Decodes images into RGBA8 textures.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, name: &str, bytes: &[u8]) -> Result<Texture> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .with_context(|| format!("Failed to decode image: {}", name))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Texture::new(name, width, height, rgba.into_raw()))
    }
}
