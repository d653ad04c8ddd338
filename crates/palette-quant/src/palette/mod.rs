//! Palette types and the legacy palette file codec
//!
//! [`ColorPalette`] is the ordered color list every other stage indexes
//! into. The [`codec`] submodule reads and writes it in five legacy
//! interchange formats and extracts embedded palettes from indexed PNGs.

pub mod codec;
mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{ColorPalette, PaletteFormat, MAX_COLORS, SLOT_SIZE};
