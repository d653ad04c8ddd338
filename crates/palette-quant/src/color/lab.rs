//! CIE L*a*b* color space
//!
//! Lab coordinates are derived from sRGB through linear RGB and CIE XYZ
//! against the D65 reference white. They exist only for measuring color
//! difference and are never written to any file.

use super::ciede2000::ciede2000;
use super::lut::srgb8_to_linear;
use super::rgb::Color;

/// D65 reference white in XYZ (2° observer), Y normalized to 1.0.
const WHITE_X: f32 = 0.95047;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.08883;

/// CIE constants (exact rational forms).
const EPSILON: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// CIEDE2000 difference to `other`.
    ///
    /// Shorthand for [`ciede2000(self, other)`](ciede2000).
    #[inline]
    pub fn delta_e(self, other: Lab) -> f32 {
        ciede2000(self, other)
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<Color> for Lab {
    /// Convert an 8-bit sRGB color to Lab. Alpha is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_quant::{Color, Lab};
    ///
    /// let white = Lab::from(Color::rgb(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
    /// ```
    fn from(color: Color) -> Self {
        let r = srgb8_to_linear(color.r);
        let g = srgb8_to_linear(color.g);
        let b = srgb8_to_linear(color.b);

        // Linear sRGB to XYZ (IEC 61966-2-1 primaries, D65)
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
