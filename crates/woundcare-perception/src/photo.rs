use image::RgbImage;

use crate::error::PerceptionError;

/// An RGB8 wound photograph. Owned by the caller; extraction only reads it.
#[derive(Debug, Clone)]
pub struct WoundImage {
    pixels: RgbImage,
}

impl WoundImage {
    /// Wrap a raw, row-major RGB8 buffer.
    ///
    /// Zero dimensions are accepted here so that extraction can report them
    /// as an invalid image; a length mismatch is rejected.
    pub fn from_rgb8(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PerceptionError> {
        let expected = width as usize * height as usize * 3;
        if buffer.len() != expected {
            return Err(PerceptionError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }
        let pixels = RgbImage::from_raw(width, height, buffer).ok_or(
            PerceptionError::BufferSize {
                expected,
                actual: 0,
            },
        )?;
        Ok(Self { pixels })
    }

    /// Decode an encoded photo (PNG or JPEG) into RGB8.
    pub fn decode(bytes: &[u8]) -> Result<Self, PerceptionError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self {
            pixels: decoded.to_rgb8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }
}

impl From<RgbImage> for WoundImage {
    fn from(pixels: RgbImage) -> Self {
        Self { pixels }
    }
}
