//! Error types for palette loading and validation

use thiserror::Error;

use super::palette::PaletteFormat;

/// Error type for palette parsing, validation and file I/O.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The palette file could not be opened, read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a palette this crate understands
    #[error("unsupported palette format: {0}")]
    UnsupportedFormat(String),

    /// The format declares more entries than the file contains
    #[error("truncated {format} palette: expected {expected} entries, found {found}")]
    TruncatedData {
        format: PaletteFormat,
        expected: usize,
        found: usize,
    },

    /// An image source carries no usable palette
    #[error("unsupported color mode: {0}")]
    UnsupportedColorMode(String),

    /// Structurally invalid content in a palette file
    #[error("malformed {format} palette: {reason}")]
    Malformed {
        format: PaletteFormat,
        reason: String,
    },

    /// No colors provided
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// More colors than a palette can hold
    #[error("palette has {count} colors (max {max})")]
    TooManyColors { count: usize, max: usize },

    /// Transparent index does not name a palette entry
    #[error("transparent index {index} out of range for {len} colors")]
    TransparentIndexOutOfRange { index: usize, len: usize },

    /// Embedded PNG palette could not be decoded
    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),
}
