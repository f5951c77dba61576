use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerceptionError {
    /// The image has no pixels to measure.
    #[error("invalid image: {width}x{height} has zero area")]
    InvalidImage { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for RGB8")]
    BufferSize { expected: usize, actual: usize },

    #[error("image decoding failed: {0}")]
    Decode(String),
}

impl From<image::ImageError> for PerceptionError {
    fn from(e: image::ImageError) -> Self {
        PerceptionError::Decode(e.to_string())
    }
}
