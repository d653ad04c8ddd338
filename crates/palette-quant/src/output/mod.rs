//! Indexed output
//!
//! [`QuantizedRaster`] is the result of a remap: window-relative indices
//! plus the palette window and bit depth they are packed for. The packing
//! functions turn indices into 4- or 8-bit byte streams, and
//! [`transparency_mask`] derives the optional mask image from the source
//! raster.

mod bit_depth;
mod mask;
mod pack;
mod quantized_raster;

pub use bit_depth::BitDepth;
pub use mask::transparency_mask;
pub use pack::{pack_indices, pack_scanlines};
pub use quantized_raster::QuantizedRaster;
