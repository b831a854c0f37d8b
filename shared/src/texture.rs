//! Decoded images attached to a character.

use serde::Serialize;

/// RGBA8 image decoded from a character source.
///
/// `name` is the file name without its extension; it is what the loader
/// matches against `icon`, `bosscard` and the other well-known names.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub pixels: Vec<u8>,
}

impl Texture {
    pub fn new(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixels,
        }
    }
}

// Prints the pixel byte count instead of the buffer.
impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &format_args!("[{} bytes]", self.pixels.len()))
            .finish()
    }
}
