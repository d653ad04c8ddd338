use std::path::Path;

use palette_quant::fs::write_atomic;
use palette_quant::output::transparency_mask;
use palette_quant::palette::codec::write_palette;
use palette_quant::{PaletteFormat, QuantizedRaster, Remapper};

use super::palette_source::load_palette;
use crate::error::{RemapError, RenderError};
use crate::models::RemapConfig;
use crate::rendering::{decode_raster, indexed_png_bytes, rgba_png_bytes};

/// Remap `input` onto `palette` and write the indexed PNG to `output`.
///
/// Stages run strictly in order; the first failure aborts the run and
/// nothing further is written.
pub fn run_remap(
    input: &Path,
    palette: &Path,
    output: &Path,
    config: &RemapConfig,
) -> Result<QuantizedRaster, RemapError> {
    let raster = decode_raster(input).map_err(|source| RemapError::DecodeImage {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %input.display(),
        width = raster.width(),
        height = raster.height(),
        "Loaded input image"
    );

    let palette = load_palette(palette)?;

    let remapper = Remapper::new(palette)
        .strategy(config.strategy())
        .window(config.window())
        .bit_depth(config.bit_depth());
    let quantized = remapper
        .remap(&raster)
        .map_err(|source| RemapError::Quantize {
            path: input.to_path_buf(),
            source,
        })?;

    // Encode everything before committing anything
    let encode_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: RenderError| RemapError::EncodeImage { path, source }
    };
    let indexed = indexed_png_bytes(&quantized).map_err(encode_error(output))?;
    let mask = if config.mask {
        let mask_path = config.mask_path(output);
        let bytes = rgba_png_bytes(&transparency_mask(&raster)).map_err(encode_error(&mask_path))?;
        Some((mask_path, bytes))
    } else {
        None
    };

    if let Some((mask_path, bytes)) = &mask {
        commit(mask_path, bytes).map_err(encode_error(mask_path))?;
    }
    if let Err(e) = commit(output, &indexed) {
        if let Some((mask_path, _)) = &mask {
            if let Err(remove) = std::fs::remove_file(mask_path) {
                tracing::warn!(path = %mask_path.display(), %remove, "Failed to remove mask");
            }
        }
        return Err(encode_error(output)(e));
    }

    tracing::info!(
        output = %output.display(),
        error = quantized.error(),
        "Remap complete"
    );
    Ok(quantized)
}

fn commit(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    write_atomic(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}

/// Re-encode a palette source in another format.
pub fn run_convert(
    palette: &Path,
    output: &Path,
    format: PaletteFormat,
) -> Result<usize, RemapError> {
    let loaded = load_palette(palette)?;
    write_palette(output, &loaded, format).map_err(|source| RemapError::WritePalette {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(loaded.len())
}
