//! Transparency mask generation.

use crate::color::Color;
use crate::quantize::Raster;

/// Build the transparency mask of `raster`.
///
/// Every pixel with nonzero alpha becomes white, keeping its alpha; fully
/// transparent pixels are copied unchanged.
///
/// # Example
///
/// ```
/// use palette_quant::output::transparency_mask;
/// use palette_quant::{Color, Raster};
///
/// let raster = Raster::new(2, 1, vec![Color::rgba(10, 20, 30, 200), Color::rgba(1, 2, 3, 0)]).unwrap();
/// let mask = transparency_mask(&raster);
/// assert_eq!(mask.pixels(), &[Color::rgba(255, 255, 255, 200), Color::rgba(1, 2, 3, 0)]);
/// ```
pub fn transparency_mask(raster: &Raster) -> Raster {
    raster.map_pixels(|p| {
        if p.a == 0 {
            p
        } else {
            Color::rgba(255, 255, 255, p.a)
        }
    })
}
