use thiserror::Error;

use palette_reducer::{PaletteError, RasterError};

/// Error from writing an animated PNG
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("No frames to encode")]
    NoFrames,

    #[error("Frame {index} is {found:?}, expected {expected:?} like frame 0")]
    FrameSizeMismatch {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Frame rate must be at least 1 fps")]
    InvalidFrameRate,

    #[error("Frames must be at least 1x1 pixels")]
    EmptyFrame,

    #[error("Frame dimensions {width}x{height} exceed the PNG limit")]
    FrameTooLarge { width: usize, height: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error from reading or writing still PNG files
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0:?}")]
    UnsupportedLayout(png::ColorType),

    #[error("Invalid pixel buffer: {0}")]
    Raster(#[from] RasterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error from loading a reduction config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette color '{value}': {source}")]
    Color {
        value: String,
        source: palette_reducer::ParseColorError,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),
}
