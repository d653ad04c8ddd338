use std::io::Cursor;
use std::path::Path;

use palette_quant::fs::write_atomic;
use palette_quant::Raster;

use crate::error::RenderError;

/// Decode any supported image file into an RGBA raster.
pub fn decode_raster(path: &Path) -> Result<Raster, RenderError> {
    let image = image::open(path)?.into_rgba8();
    let (width, height) = image.dimensions();
    let raster = Raster::from_rgba8(width, height, image.as_raw())?;
    tracing::debug!(
        path = %path.display(),
        width,
        height,
        "Decoded image"
    );
    Ok(raster)
}

/// Encode a raster as an 8-bit RGBA PNG.
pub fn rgba_png_bytes(raster: &Raster) -> Result<Vec<u8>, RenderError> {
    if raster.is_empty() {
        return Err(RenderError::UnsupportedDimensions {
            width: raster.width(),
            height: raster.height(),
        });
    }
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raster.to_rgba8())?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}

/// Write a raster as an RGBA PNG, committing the file atomically.
pub fn encode_rgba_png(path: &Path, raster: &Raster) -> Result<(), RenderError> {
    let bytes = rgba_png_bytes(raster)?;
    write_atomic(path, &bytes)?;
    tracing::info!(path = %path.display(), "Wrote RGBA image");
    Ok(())
}
