use std::io::Cursor;
use std::path::Path;

use palette_quant::fs::write_atomic;
use palette_quant::{BitDepth, QuantizedRaster};

use crate::error::RenderError;

/// Encode a quantized raster as an indexed PNG.
///
/// - 4-bit: PLTE is the window, pixels are window indices
/// - 8-bit: PLTE is the master palette up to the window end, pixels are
///   master indices
///
/// A tRNS chunk marks the transparent index when it falls inside the
/// window.
pub fn indexed_png_bytes(quantized: &QuantizedRaster) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (quantized.width(), quantized.height());
    if width == 0 || height == 0 {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    let depth = match quantized.bit_depth() {
        BitDepth::Four => png::BitDepth::Four,
        BitDepth::Eight => png::BitDepth::Eight,
    };
    let plte: Vec<u8> = quantized
        .plte()
        .iter()
        .flat_map(|c| c.to_rgb_bytes())
        .collect();
    let trns = quantized.packed_transparent_index().map(|index| {
        let mut alphas = vec![255u8; index + 1];
        alphas[index] = 0;
        alphas
    });

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_palette(plte);
        if let Some(trns) = trns {
            encoder.set_trns(trns);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&quantized.scanlines())?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}

/// Write an indexed PNG, committing the file atomically.
pub fn encode_indexed_png(path: &Path, quantized: &QuantizedRaster) -> Result<(), RenderError> {
    let bytes = indexed_png_bytes(quantized)?;
    write_atomic(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        bits = quantized.bit_depth().bits(),
        colors = quantized.plte().len(),
        bytes = bytes.len(),
        "Wrote indexed image"
    );
    Ok(())
}
