//! Quantization error type

use thiserror::Error;

/// Failure to quantize a raster against a palette window.
#[derive(Debug, Error)]
pub enum QuantizeError {
    /// The delegated quantizer refused the request
    #[error("quantizer rejected the request: {0}")]
    Rejected(String),

    /// No candidate colors to match against
    #[error("palette window is empty")]
    EmptyWindow,

    /// The requested window does not lie inside the palette
    #[error("palette window {min}..={max} is invalid for a palette of {len} colors")]
    InvalidRange { min: usize, max: usize, len: usize },

    /// The window cannot be addressed at the requested bit depth
    #[error("{bits}-bit output cannot address palette window {min}..={max}")]
    WindowTooLarge { bits: u8, min: usize, max: usize },

    /// Pixel buffer length disagrees with the raster dimensions
    #[error("{width}x{height} raster needs {expected} pixels, got {found}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },
}
