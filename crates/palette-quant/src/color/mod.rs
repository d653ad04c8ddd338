//! Color types and conversion utilities
//!
//! This module provides the 8-bit [`Color`] value type used everywhere a
//! palette entry or pixel is stored, and the perceptual [`Lab`] space used
//! only to measure color difference.
//!
//! # Example
//!
//! ```
//! use palette_quant::{ciede2000, Color, Lab};
//!
//! let red = Lab::from(Color::rgb(255, 0, 0));
//! let dark_red = Lab::from(Color::rgb(200, 0, 0));
//!
//! // CIEDE2000 is symmetric and zero only for identical colors
//! assert_eq!(ciede2000(red, red), 0.0);
//! assert!((ciede2000(red, dark_red) - ciede2000(dark_red, red)).abs() < 1e-4);
//! ```

mod ciede2000;
mod lab;
mod lut;
mod rgb;

pub use ciede2000::ciede2000;
pub use lab::Lab;
pub use rgb::Color;
