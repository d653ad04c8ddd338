//! Ordered color palette and the closed set of palette file formats.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Color;

/// Upper bound on palette length (16-bit entry counts in the file formats).
pub const MAX_COLORS: usize = 65535;

/// Number of entries in one hardware sub-palette ("slot").
pub const SLOT_SIZE: usize = 16;

/// Legacy palette file formats.
///
/// Reading never trusts the file extension: the codec sniffs file content
/// and produces one of these tags. Writing always takes the format as an
/// explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    /// Adobe Color Table: 256 raw RGB triplets plus an optional trailer
    Act,
    /// Microsoft RIFF palette (`RIFF` / `PAL ` / `data`)
    Riff,
    /// Paint Shop Pro text palette (`JASC-PAL`)
    Jasc,
    /// GIMP text palette (`GIMP Palette`)
    Gimp,
    /// Paint.NET hex text palette
    PaintNet,
}

impl PaletteFormat {
    /// All formats, in declaration order.
    pub const ALL: [PaletteFormat; 5] = [
        PaletteFormat::Act,
        PaletteFormat::Riff,
        PaletteFormat::Jasc,
        PaletteFormat::Gimp,
        PaletteFormat::PaintNet,
    ];

    /// Conventional file extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            PaletteFormat::Act => "act",
            PaletteFormat::Riff | PaletteFormat::Jasc => "pal",
            PaletteFormat::Gimp => "gpl",
            PaletteFormat::PaintNet => "txt",
        }
    }

    /// Guess a format from a file extension.
    ///
    /// `.pal` is ambiguous between RIFF and JASC; it maps to RIFF, the
    /// binary Microsoft flavour.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "act" => Some(PaletteFormat::Act),
            "pal" => Some(PaletteFormat::Riff),
            "gpl" => Some(PaletteFormat::Gimp),
            "txt" => Some(PaletteFormat::PaintNet),
            _ => None,
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaletteFormat::Act => "ACT",
            PaletteFormat::Riff => "RIFF-PAL",
            PaletteFormat::Jasc => "JASC-PAL",
            PaletteFormat::Gimp => "GIMP",
            PaletteFormat::PaintNet => "Paint.NET",
        };
        f.write_str(name)
    }
}

impl FromStr for PaletteFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "act" => Ok(PaletteFormat::Act),
            "riff" | "riff-pal" | "mspal" => Ok(PaletteFormat::Riff),
            "jasc" | "jasc-pal" => Ok(PaletteFormat::Jasc),
            "gimp" | "gpl" => Ok(PaletteFormat::Gimp),
            "paint-net" | "paintnet" | "paint.net" => Ok(PaletteFormat::PaintNet),
            other => Err(PaletteError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// An ordered, immutable list of colors plus an optional key-color index.
///
/// Order is significant: it is the index space of every indexed raster
/// produced from this palette. Once built, entries are never modified;
/// later stages only select windows of it.
///
/// # Example
///
/// ```
/// use palette_quant::{Color, ColorPalette};
///
/// let palette = ColorPalette::new(vec![Color::BLACK, Color::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.transparent_index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Color>,
    transparent_index: Option<usize>,
}

impl ColorPalette {
    /// Create a palette from an ordered color list.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] when `colors` is empty
    /// - [`PaletteError::TooManyColors`] beyond [`MAX_COLORS`]
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
                max: MAX_COLORS,
            });
        }
        Ok(Self {
            colors,
            transparent_index: None,
        })
    }

    /// Designate (or clear) the transparent key-color index.
    ///
    /// # Errors
    ///
    /// [`PaletteError::TransparentIndexOutOfRange`] when the index does not
    /// name an entry.
    pub fn with_transparent_index(mut self, index: Option<usize>) -> Result<Self, PaletteError> {
        if let Some(index) = index {
            if index >= self.colors.len() {
                return Err(PaletteError::TransparentIndexOutOfRange {
                    index,
                    len: self.colors.len(),
                });
            }
        }
        self.transparent_index = index;
        Ok(self)
    }

    /// Build a candidate palette from raster pixels.
    ///
    /// Alpha is discarded, colors are sorted by packed 24-bit RGB value and
    /// adjacent duplicates collapsed, so the result is duplicate-free and
    /// in ascending packed-RGB order.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_quant::{Color, ColorPalette};
    ///
    /// let pixels = [
    ///     Color::rgb(255, 0, 0),
    ///     Color::rgba(0, 0, 255, 10),
    ///     Color::rgb(255, 0, 0),
    /// ];
    /// let palette = ColorPalette::from_raster(&pixels).unwrap();
    /// assert_eq!(palette.colors(), &[Color::rgb(0, 0, 255), Color::rgb(255, 0, 0)]);
    /// ```
    pub fn from_raster(pixels: &[Color]) -> Result<Self, PaletteError> {
        let mut colors: Vec<Color> = pixels.iter().map(|c| c.without_alpha()).collect();
        colors.sort_unstable_by_key(|c| c.packed_rgb());
        colors.dedup();
        tracing::debug!(
            pixels = pixels.len(),
            unique = colors.len(),
            "Extracted raster palette candidates"
        );
        Self::new(colors)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// The transparent key-color index, if the source declared one.
    #[inline]
    pub fn transparent_index(&self) -> Option<usize> {
        self.transparent_index
    }

    /// Number of 16-entry slots covering the palette (the last may be short).
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.colors.len().div_ceil(SLOT_SIZE)
    }

    /// Inclusive index bounds of `slot`, clipped to the palette length.
    ///
    /// Returns `None` when the slot starts past the last entry.
    pub fn slot_bounds(&self, slot: usize) -> Option<RangeInclusive<usize>> {
        let start = slot.checked_mul(SLOT_SIZE)?;
        if start >= self.colors.len() {
            return None;
        }
        let end = (start + SLOT_SIZE - 1).min(self.colors.len() - 1);
        Some(start..=end)
    }

    /// Entries `min..=max`, or `None` when the range is empty or out of bounds.
    pub fn window(&self, bounds: RangeInclusive<usize>) -> Option<&[Color]> {
        let (min, max) = (*bounds.start(), *bounds.end());
        if min > max || max >= self.colors.len() {
            return None;
        }
        Some(&self.colors[min..=max])
    }

    /// Entries of 16-entry slot `slot`, clipped to the palette length.
    pub fn slot(&self, slot: usize) -> Option<&[Color]> {
        self.slot_bounds(slot).and_then(|bounds| self.window(bounds))
    }

    /// Consume the palette, returning its color list.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<Color> {
        (0..n).map(|i| Color::rgb(i as u8, 0, 0)).collect()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            ColorPalette::new(Vec::new()),
            Err(PaletteError::EmptyPalette)
        ));
    }

    #[test]
    fn test_too_many_rejected() {
        let colors = vec![Color::BLACK; MAX_COLORS + 1];
        assert!(matches!(
            ColorPalette::new(colors),
            Err(PaletteError::TooManyColors { .. })
        ));
    }

    #[test]
    fn test_duplicates_allowed_in_file_palettes() {
        let palette = ColorPalette::new(vec![Color::BLACK, Color::BLACK]).unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_transparent_index_bounds() {
        let palette = ColorPalette::new(ramp(4)).unwrap();
        let keyed = palette.clone().with_transparent_index(Some(3)).unwrap();
        assert_eq!(keyed.transparent_index(), Some(3));
        assert!(matches!(
            palette.with_transparent_index(Some(4)),
            Err(PaletteError::TransparentIndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_from_raster_sorted_unique() {
        let pixels = [
            Color::rgb(9, 9, 9),
            Color::rgba(1, 2, 3, 0),
            Color::rgb(9, 9, 9),
            Color::rgb(1, 2, 3),
            Color::rgb(0, 0, 200),
        ];
        let palette = ColorPalette::from_raster(&pixels).unwrap();
        assert_eq!(
            palette.colors(),
            &[Color::rgb(0, 0, 200), Color::rgb(1, 2, 3), Color::rgb(9, 9, 9)]
        );
    }

    #[test]
    fn test_slot_count_and_bounds() {
        let palette = ColorPalette::new(ramp(40)).unwrap();
        assert_eq!(palette.slot_count(), 3);
        assert_eq!(palette.slot_bounds(0), Some(0..=15));
        assert_eq!(palette.slot_bounds(1), Some(16..=31));
        assert_eq!(palette.slot_bounds(2), Some(32..=39));
        assert_eq!(palette.slot_bounds(3), None);
        assert_eq!(palette.slot(2).map(<[Color]>::len), Some(8));
    }

    #[test]
    fn test_window() {
        let palette = ColorPalette::new(ramp(8)).unwrap();
        assert_eq!(palette.window(2..=4).map(|w| w.len()), Some(3));
        assert_eq!(palette.window(4..=8), None);
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = palette.window(5..=2);
        assert_eq!(reversed, None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("gimp".parse::<PaletteFormat>().unwrap(), PaletteFormat::Gimp);
        assert_eq!("Paint-NET".parse::<PaletteFormat>().unwrap(), PaletteFormat::PaintNet);
        assert_eq!("riff".parse::<PaletteFormat>().unwrap(), PaletteFormat::Riff);
        assert!("bmp".parse::<PaletteFormat>().is_err());
    }

    #[test]
    fn test_format_extension_round_trip() {
        for format in [PaletteFormat::Act, PaletteFormat::Gimp, PaletteFormat::PaintNet] {
            assert_eq!(PaletteFormat::from_extension(format.extension()), Some(format));
        }
        assert_eq!(PaletteFormat::from_extension("PAL"), Some(PaletteFormat::Riff));
    }
}
