use std::path::PathBuf;

use palette_quant::{PaletteError, QuantizeError};
use thiserror::Error;

/// A failed run, naming the stage and the file involved.
#[derive(Debug, Error)]
pub enum RemapError {
    #[error("Failed to read palette {}: {source}", .path.display())]
    ReadPalette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Failed to quantize {}: {source}", .path.display())]
    Quantize {
        path: PathBuf,
        #[source]
        source: palette_quant::Error,
    },

    #[error("Failed to write image {}: {source}", .path.display())]
    EncodeImage {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write palette {}: {source}", .path.display())]
    WritePalette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Invalid configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

/// Raster image decoding and encoding failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Raster error: {0}")]
    Raster(#[from] QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        RenderError::PngEncode(e.to_string())
    }
}
