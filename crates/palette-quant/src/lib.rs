#![allow(clippy::module_inception, clippy::excessive_precision)]

//! palette-quant: legacy palette codecs and perceptual palette remapping
//!
//! This library maps full-color rasters onto small, fixed, ordered palettes
//! (16 or 256 entries) with minimal perceptual error, and reads and writes
//! palettes in the common legacy interchange formats.
//!
//! # Quick Start
//!
//! The [`Remapper`] builder is the primary entry point:
//!
//! ```
//! use palette_quant::{Color, ColorPalette, Raster, Remapper, Window};
//!
//! let palette = ColorPalette::new(vec![
//!     Color::rgb(0, 0, 0),
//!     Color::rgb(255, 0, 0),
//!     Color::rgb(255, 255, 255),
//! ])
//! .unwrap();
//! let raster = Raster::new(3, 1, vec![
//!     Color::rgb(250, 250, 245),
//!     Color::rgb(200, 20, 10),
//!     Color::rgb(10, 10, 10),
//! ])
//! .unwrap();
//!
//! let result = Remapper::new(palette).window(Window::Full).remap(&raster).unwrap();
//! assert_eq!(result.indices(), &[2, 1, 0]);
//! ```
//!
//! # Palette Files
//!
//! [`palette::codec`] sniffs file content to pick a reader; writers take an
//! explicit [`PaletteFormat`]:
//!
//! | Format    | Extension | Kind   | Transparency        |
//! |-----------|-----------|--------|---------------------|
//! | ACT       | `.act`    | binary | big-endian trailer  |
//! | RIFF-PAL  | `.pal`    | binary | none                |
//! | JASC-PAL  | `.pal`    | text   | none                |
//! | GIMP      | `.gpl`    | text   | none                |
//! | Paint.NET | `.txt`    | text   | none                |
//!
//! Indexed PNGs are accepted as a read-only palette source (PLTE + tRNS).
//!
//! # Color Difference
//!
//! Every nearest-color decision is made with CIEDE2000 in CIE L*a*b*
//! (D65). sRGB channels are linearized through a build-time lookup table,
//! transformed to XYZ and then to Lab. [`Lab`] values exist only for
//! measurement and are never written anywhere.
//!
//! # Slots
//!
//! Constrained hardware often splits a 256-color palette into sixteen
//! 16-color sub-palettes. [`Window::Slot`] restricts matching to one of
//! them and [`Window::AutoSlot`] tries each in turn, keeping the first slot
//! with the lowest error. 4-bit output always stores slot-relative indices;
//! 8-bit output stores master palette indices.

pub mod api;
pub mod color;
pub mod fs;
pub mod output;
pub mod palette;
pub mod quantize;


pub use api::{Error, Remapper, Window};
pub use color::{ciede2000, Color, Lab};
pub use output::{BitDepth, QuantizedRaster};
pub use palette::{ColorPalette, PaletteError, PaletteFormat};
pub use quantize::{QuantizeError, Quantized, Quantizer, Raster, Strategy};
