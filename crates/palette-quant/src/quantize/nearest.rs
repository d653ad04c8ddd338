//! Direct nearest-color assignment under CIEDE2000.

use std::collections::HashMap;

use super::candidates::CandidateSet;
use super::error::QuantizeError;
use super::raster::Raster;
use super::{Quantized, Quantizer};
use crate::color::{Color, Lab};

/// Assigns every pixel the perceptually closest window color.
///
/// Each distinct pixel RGB value is converted to Lab and searched once;
/// repeats reuse the cached result. Alpha plays no part in matching.
/// The reported error is the mean of squared ΔE00 over all pixels.
///
/// # Example
///
/// ```
/// use palette_quant::quantize::{NearestColor, Quantizer};
/// use palette_quant::{Color, Raster};
///
/// let raster = Raster::new(2, 1, vec![Color::rgb(250, 10, 10), Color::rgb(5, 5, 5)]).unwrap();
/// let window = [Color::BLACK, Color::rgb(255, 0, 0)];
/// let result = NearestColor.quantize(&raster, &window).unwrap();
/// assert_eq!(result.indices, vec![1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestColor;

impl Quantizer for NearestColor {
    fn quantize(&self, raster: &Raster, fixed: &[Color]) -> Result<Quantized, QuantizeError> {
        let candidates = CandidateSet::new(fixed)?;
        let mut cache: HashMap<u32, (u8, f32)> = HashMap::new();
        let mut indices = Vec::with_capacity(raster.len());
        let mut sum_sq = 0.0f64;

        for pixel in raster.pixels() {
            let (index, distance) = *cache
                .entry(pixel.packed_rgb())
                .or_insert_with(|| candidates.nearest(Lab::from(*pixel)));
            indices.push(index);
            sum_sq += f64::from(distance) * f64::from(distance);
        }

        let error = if indices.is_empty() {
            0.0
        } else {
            sum_sq / indices.len() as f64
        };
        tracing::debug!(
            pixels = indices.len(),
            distinct = cache.len(),
            candidates = candidates.len(),
            error,
            "Nearest-color assignment"
        );
        Ok(Quantized { indices, error })
    }
}
