//! Raster image I/O
//!
//! Decoding goes through the `image` crate (any format it supports, forced
//! to RGBA8). Indexed and RGBA PNG output is written with the `png` crate
//! directly so the PLTE and tRNS chunks are exactly the palette window.

pub mod indexed_png;
pub mod raster;

pub use indexed_png::{encode_indexed_png, indexed_png_bytes};
pub use raster::{decode_raster, encode_rgba_png, rgba_png_bytes};
