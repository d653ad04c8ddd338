//! Unified error type for the palette-quant public API.

use thiserror::Error;

use crate::palette::PaletteError;
use crate::quantize::QuantizeError;

/// Unified error type for the palette-quant public API.
///
/// Wraps the palette and quantization errors so application code can use
/// a single `?`.
///
/// # Example
///
/// ```
/// use palette_quant::{Color, ColorPalette, Error};
///
/// fn two_tone() -> Result<ColorPalette, Error> {
///     Ok(ColorPalette::new(vec![Color::BLACK, Color::WHITE])?)
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Palette loading or validation failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Quantization failed
    #[error("quantization error: {0}")]
    Quantize(#[from] QuantizeError),
}
