//! Quantization engine
//!
//! A [`Quantizer`] maps every pixel of a [`Raster`] to an index into a
//! window of palette colors and reports an aggregate error for the mapping.
//! Two strategies exist:
//!
//! - [`NearestColor`]: direct CIEDE2000 nearest-color assignment
//! - [`Imagequant`]: libimagequant restricted to the window colors
//!
//! [`search_slots`] runs a quantizer against every 16-entry slot of a
//! palette and picks the slot with the lowest error.

mod candidates;
mod delegated;
mod error;
mod nearest;
mod raster;
mod slot;

use std::fmt;
use std::str::FromStr;

pub use candidates::{CandidateSet, MAX_WINDOW};
pub use delegated::Imagequant;
pub use error::QuantizeError;
pub use nearest::NearestColor;
pub use raster::Raster;
pub use slot::{search_slots, SlotSearch};

use crate::color::Color;

/// Per-pixel window indices plus the error of the mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantized {
    /// One window-relative index per pixel, row-major
    pub indices: Vec<u8>,
    /// Aggregate error; lower is better, comparable only within one strategy
    pub error: f64,
}

/// Maps a raster onto a fixed, ordered set of colors.
///
/// Implementations must only produce indices `< fixed.len()` and must be
/// deterministic for identical inputs.
pub trait Quantizer {
    fn quantize(&self, raster: &Raster, fixed: &[Color]) -> Result<Quantized, QuantizeError>;
}

/// Selectable quantization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Direct CIEDE2000 nearest-color assignment
    #[default]
    Nearest,
    /// libimagequant with the window pinned as fixed colors
    Imagequant,
}

impl Strategy {
    /// The quantizer implementing this strategy.
    pub fn quantizer(self) -> &'static dyn Quantizer {
        match self {
            Strategy::Nearest => &NearestColor,
            Strategy::Imagequant => &Imagequant,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Nearest => f.write_str("nearest"),
            Strategy::Imagequant => f.write_str("imagequant"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "ciede2000" => Ok(Strategy::Nearest),
            "imagequant" | "liq" => Ok(Strategy::Imagequant),
            other => Err(format!("unknown quantizer {other:?}")),
        }
    }
}
