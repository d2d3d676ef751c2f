use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuotoneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color format: {0:?} (expected 3 or 6 hex digits, optionally #-prefixed)")]
    InvalidColorFormat(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid image: {width}x{height} with {len} bytes of RGBA data")]
    InvalidImage { width: u32, height: u32, len: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DuotoneError>;
