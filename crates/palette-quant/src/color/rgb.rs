//! 8-bit RGBA color value
//!
//! Palette entries and raster pixels share this representation. Channels are
//! plain bytes in sRGB encoding; alpha defaults to opaque and is carried but
//! never used for color matching.

use std::fmt;

/// An 8-bit-per-channel sRGB color with optional alpha.
///
/// `Color` is a plain value type. Two colors are equal when all four
/// channels are equal; use [`Color::packed_rgb`] to compare ignoring alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color.
    ///
    /// # Example
    /// ```
    /// use palette_quant::Color;
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack the RGB channels into a 24-bit value `0xRRGGBB`.
    ///
    /// This is the total order used when deduplicating raster colors.
    ///
    /// # Example
    /// ```
    /// use palette_quant::Color;
    /// assert_eq!(Color::rgb(0x12, 0x34, 0x56).packed_rgb(), 0x123456);
    /// ```
    #[inline]
    pub const fn packed_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Build an opaque color from the low 24 bits of `value` (`0xRRGGBB`).
    ///
    /// Any bits above the low 24 (such as an alpha byte in `0xAARRGGBB`)
    /// are ignored.
    #[inline]
    pub const fn from_packed_rgb(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// The same color with alpha forced to opaque.
    #[inline]
    pub const fn without_alpha(self) -> Self {
        Self::rgb(self.r, self.g, self.b)
    }

    /// The RGB channels as a byte array.
    #[inline]
    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Color::rgb(bytes[0], bytes[1], bytes[2])
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Color::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}
