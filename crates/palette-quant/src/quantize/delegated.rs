//! Fixed-palette quantization delegated to libimagequant.

use super::candidates::MAX_WINDOW;
use super::error::QuantizeError;
use super::raster::Raster;
use super::{Quantized, Quantizer};
use crate::color::{Color, Lab};

/// Statistical quantizer pinned to the window colors.
///
/// Every window color is registered with libimagequant as a fixed color and
/// the color budget equals the window length, so the library can only pick
/// from the supplied colors. Dithering is disabled. Pixels are treated as
/// opaque.
///
/// The reported error is recomputed from the produced indices as the mean
/// squared ΔE00, the same measure [`super::NearestColor`] reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Imagequant;

fn rejected(err: imagequant::Error) -> QuantizeError {
    QuantizeError::Rejected(err.to_string())
}

fn to_rgba(color: Color) -> imagequant::RGBA {
    imagequant::RGBA {
        r: color.r,
        g: color.g,
        b: color.b,
        a: 255,
    }
}

fn rgb_distance_sq(a: Color, b: Color) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Window index of the color closest to `color` in RGB (first on ties).
fn window_index(fixed: &[Color], color: Color) -> u8 {
    let mut best = (0usize, u32::MAX);
    for (i, &candidate) in fixed.iter().enumerate() {
        let d = rgb_distance_sq(candidate, color);
        if d < best.1 {
            best = (i, d);
        }
    }
    best.0 as u8
}

/// Mean squared ΔE00 between each pixel and its assigned window color.
///
/// Same scale as [`super::NearestColor`], so slot search can compare
/// windows quantized either way.
fn delta_e_mse(raster: &Raster, fixed: &[Color], indices: &[u8]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    let window: Vec<Lab> = fixed.iter().map(|&c| Lab::from(c)).collect();
    let total: f64 = raster
        .pixels()
        .iter()
        .zip(indices)
        .map(|(&pixel, &i)| {
            let d = f64::from(Lab::from(pixel).delta_e(window[i as usize]));
            d * d
        })
        .sum();
    total / indices.len() as f64
}

impl Quantizer for Imagequant {
    fn quantize(&self, raster: &Raster, fixed: &[Color]) -> Result<Quantized, QuantizeError> {
        if fixed.is_empty() {
            return Err(QuantizeError::EmptyWindow);
        }
        if fixed.len() > MAX_WINDOW {
            return Err(QuantizeError::WindowTooLarge {
                bits: 8,
                min: 0,
                max: fixed.len() - 1,
            });
        }
        // libimagequant needs a budget of at least two colors
        if fixed.len() == 1 || raster.is_empty() {
            let indices = vec![0u8; raster.len()];
            let error = delta_e_mse(raster, fixed, &indices);
            return Ok(Quantized { indices, error });
        }

        let pixels: Vec<imagequant::RGBA> = raster.pixels().iter().map(|&c| to_rgba(c)).collect();

        let mut liq = imagequant::new();
        liq.set_max_colors(fixed.len() as u32).map_err(rejected)?;
        let mut image = liq
            .new_image(
                pixels,
                raster.width() as usize,
                raster.height() as usize,
                0.0,
            )
            .map_err(rejected)?;
        for &color in fixed {
            image.add_fixed_color(to_rgba(color)).map_err(rejected)?;
        }

        let mut result = liq.quantize(&mut image).map_err(rejected)?;
        result.set_dithering_level(0.0).map_err(rejected)?;
        let (palette, remapped) = result.remapped(&mut image).map_err(rejected)?;

        let lookup: Vec<u8> = palette
            .iter()
            .map(|p| window_index(fixed, Color::rgb(p.r, p.g, p.b)))
            .collect();
        let indices = remapped
            .iter()
            .map(|&i| {
                lookup.get(i as usize).copied().ok_or_else(|| {
                    QuantizeError::Rejected(format!(
                        "remapped index {i} outside a {}-entry palette",
                        lookup.len()
                    ))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        // libimagequant's own figure ignores fixed colors
        let error = delta_e_mse(raster, fixed, &indices);
        tracing::debug!(
            pixels = indices.len(),
            colors = fixed.len(),
            error,
            "libimagequant remap"
        );
        Ok(Quantized { indices, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_colors_map_to_their_entries() {
        let window = [
            Color::rgb(0, 0, 0),
            Color::rgb(255, 255, 255),
            Color::rgb(255, 0, 0),
            Color::rgb(0, 0, 255),
        ];
        let pixels: Vec<Color> = (0..64).map(|i| window[i % 4]).collect();
        let raster = Raster::new(8, 8, pixels).unwrap();
        let result = Imagequant.quantize(&raster, &window).unwrap();
        let expected: Vec<u8> = (0..64).map(|i| (i % 4) as u8).collect();
        assert_eq!(result.indices, expected);
        assert!(result.error < 1.0, "error {}", result.error);
    }

    #[test]
    fn test_single_color_window_is_trivial() {
        let raster = Raster::new(2, 1, vec![Color::BLACK, Color::rgb(3, 0, 0)]).unwrap();
        let result = Imagequant.quantize(&raster, &[Color::BLACK]).unwrap();
        assert_eq!(result.indices, vec![0, 0]);
        let d = f64::from(Lab::from(Color::rgb(3, 0, 0)).delta_e(Lab::from(Color::BLACK)));
        assert!((result.error - d * d / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_error_reflects_missed_window() {
        let window = vec![Color::rgb(255, 0, 0); 16];
        let raster = Raster::new(2, 1, vec![Color::rgb(0, 0, 255); 2]).unwrap();
        let result = Imagequant.quantize(&raster, &window).unwrap();
        assert_eq!(result.indices, vec![0, 0]);
        assert!(result.error > 100.0, "error {}", result.error);
    }

    #[test]
    fn test_error_matches_nearest_scale() {
        let window = [Color::BLACK, Color::WHITE];
        let raster = Raster::new(
            2,
            1,
            vec![Color::rgb(30, 30, 30), Color::rgb(220, 220, 220)],
        )
        .unwrap();
        let delegated = Imagequant.quantize(&raster, &window).unwrap();
        let nearest = super::super::NearestColor.quantize(&raster, &window).unwrap();
        assert_eq!(delegated.indices, nearest.indices);
        assert!((delegated.error - nearest.error).abs() < 1e-6);
    }

    #[test]
    fn test_oversized_window_rejected() {
        let raster = Raster::new(1, 1, vec![Color::BLACK]).unwrap();
        let window = vec![Color::BLACK; 300];
        assert!(matches!(
            Imagequant.quantize(&raster, &window),
            Err(QuantizeError::WindowTooLarge { .. })
        ));
    }

    #[test]
    fn test_window_index_prefers_first_exact() {
        let fixed = [Color::rgb(1, 1, 1), Color::rgb(5, 5, 5), Color::rgb(5, 5, 5)];
        assert_eq!(window_index(&fixed, Color::rgb(5, 5, 5)), 1);
        assert_eq!(window_index(&fixed, Color::rgb(2, 2, 2)), 0);
    }
}
