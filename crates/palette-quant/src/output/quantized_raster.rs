//! QuantizedRaster: the indexed result of a remap.
//!
//! Indices are always window-relative. How they reach the output bytes
//! depends on the bit depth:
//!
//! | Depth | Packed value         | Palette referenced by packed values |
//! |-------|----------------------|-------------------------------------|
//! | 4-bit | window index         | the window (≤ 16 colors)            |
//! | 8-bit | window index + min   | master palette `0..=max`            |

use std::ops::RangeInclusive;

use super::bit_depth::BitDepth;
use super::pack::{pack_indices, pack_scanlines};
use crate::color::Color;
use crate::palette::ColorPalette;
use crate::quantize::{QuantizeError, Raster};

/// Per-pixel palette indices plus the window they index.
///
/// Construction enforces that every index names a window entry, that
/// 4-bit windows hold at most 16 colors, and that 8-bit windows end at
/// master index 255 or below.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedRaster {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    window: Vec<Color>,
    plte: Vec<Color>,
    range: RangeInclusive<usize>,
    bit_depth: BitDepth,
    error: f64,
    transparent_index: Option<u8>,
}

impl QuantizedRaster {
    /// Assemble a quantized raster over `range` of `palette`.
    ///
    /// The palette's transparent index is kept when it lies inside the
    /// window and is dropped otherwise.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::InvalidRange`] if `range` is empty or leaves the palette
    /// - [`QuantizeError::WindowTooLarge`] if `bit_depth` cannot address the window
    /// - [`QuantizeError::DimensionMismatch`] if `indices` is not `width * height` long
    /// - [`QuantizeError::Rejected`] if an index falls outside the window
    pub fn new(
        width: u32,
        height: u32,
        indices: Vec<u8>,
        palette: &ColorPalette,
        range: RangeInclusive<usize>,
        bit_depth: BitDepth,
        error: f64,
    ) -> Result<Self, QuantizeError> {
        let (min, max) = (*range.start(), *range.end());
        let window = palette
            .window(range.clone())
            .ok_or(QuantizeError::InvalidRange {
                min,
                max,
                len: palette.len(),
            })?;

        let addressable = match bit_depth {
            BitDepth::Four => window.len() <= bit_depth.max_entries(),
            BitDepth::Eight => max < bit_depth.max_entries(),
        };
        if !addressable {
            return Err(QuantizeError::WindowTooLarge {
                bits: bit_depth.bits(),
                min,
                max,
            });
        }

        let expected = width as usize * height as usize;
        if indices.len() != expected {
            return Err(QuantizeError::DimensionMismatch {
                width,
                height,
                expected,
                found: indices.len(),
            });
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= window.len()) {
            return Err(QuantizeError::Rejected(format!(
                "index {bad} outside a {}-entry window",
                window.len()
            )));
        }

        let plte = match bit_depth {
            BitDepth::Four => window.to_vec(),
            BitDepth::Eight => palette.colors()[..=max].to_vec(),
        };
        let transparent_index = palette
            .transparent_index()
            .filter(|t| range.contains(t))
            .map(|t| (t - min) as u8);

        Ok(Self {
            width,
            height,
            indices,
            window: window.to_vec(),
            plte,
            range,
            bit_depth,
            error,
            transparent_index,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window-relative indices, one per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The palette window the indices refer to.
    #[inline]
    pub fn palette(&self) -> &[Color] {
        &self.window
    }

    /// Master palette bounds of the window.
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.range.clone()
    }

    #[inline]
    pub fn range_min(&self) -> usize {
        *self.range.start()
    }

    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Error reported by the quantizer that produced the indices.
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Window-relative transparent index, if the palette's key color lies
    /// inside the window.
    #[inline]
    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent_index
    }

    /// Colors addressed by packed byte values (PNG `PLTE`).
    #[inline]
    pub fn plte(&self) -> &[Color] {
        &self.plte
    }

    /// Transparent index in packed value space.
    pub fn packed_transparent_index(&self) -> Option<usize> {
        self.transparent_index.map(|t| t as usize + self.offset() as usize)
    }

    fn offset(&self) -> u8 {
        match self.bit_depth {
            BitDepth::Four => 0,
            // Bounded by the 8-bit window check in `new`
            BitDepth::Eight => u8::try_from(self.range_min()).unwrap_or(u8::MAX),
        }
    }

    /// Indices as one continuous packed stream.
    pub fn packed(&self) -> Vec<u8> {
        pack_indices(&self.indices, self.bit_depth, self.offset())
    }

    /// Indices packed per row (PNG scanline layout).
    pub fn scanlines(&self) -> Vec<u8> {
        pack_scanlines(&self.indices, self.width, self.bit_depth, self.offset())
    }

    /// Expand indices back to window colors.
    pub fn to_raster(&self) -> Result<Raster, QuantizeError> {
        let pixels: Vec<Color> = self
            .indices
            .iter()
            .map(|&i| self.window[i as usize])
            .collect();
        Raster::new(self.width, self.height, pixels)
    }
}
