//! RGBA pixel raster.

use super::error::QuantizeError;
use crate::color::Color;

/// A width × height grid of RGBA pixels in row-major order.
///
/// # Example
///
/// ```
/// use palette_quant::{Color, Raster};
///
/// let raster = Raster::new(2, 1, vec![Color::BLACK, Color::WHITE]).unwrap();
/// assert_eq!(raster.pixel(1, 0), Some(Color::WHITE));
/// assert!(Raster::new(2, 2, vec![Color::BLACK]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Wrap a pixel buffer, checking it matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, QuantizeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(QuantizeError::DimensionMismatch {
                width,
                height,
                expected,
                found: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved RGBA8 bytes (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, QuantizeError> {
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at (`x`, `y`), if inside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Interleaved RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    /// A raster of the same size with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl FnMut(Color) -> Color) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Consume the raster, returning its pixels.
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}
