use std::path::Path;

use palette_quant::palette::codec::read_palette;
use palette_quant::quantize::MAX_WINDOW;
use palette_quant::{ColorPalette, PaletteError};

use crate::error::RemapError;
use crate::rendering::decode_raster;

/// How a palette argument is turned into a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    /// A palette file understood by the codec
    File,
    /// A PNG: embedded palette if indexed, otherwise its distinct colors
    Png,
    /// Any other raster: its distinct colors
    Raster,
}

impl PaletteSource {
    /// Pick a source kind from the file extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "act" | "pal" | "gpl" | "txt" => Some(Self::File),
            "png" => Some(Self::Png),
            "bmp" | "gif" | "jpg" | "jpeg" | "tga" => Some(Self::Raster),
            _ => None,
        }
    }
}

/// Load the palette named on the command line.
pub fn load_palette(path: &Path) -> Result<ColorPalette, RemapError> {
    let read_error = |source: PaletteError| RemapError::ReadPalette {
        path: path.to_path_buf(),
        source,
    };

    let source = PaletteSource::for_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        read_error(PaletteError::UnsupportedFormat(format!(
            "unknown palette extension {ext:?}"
        )))
    })?;

    match source {
        PaletteSource::File => read_palette(path).map_err(read_error),
        PaletteSource::Png => match read_palette(path) {
            Err(PaletteError::UnsupportedColorMode(mode)) => {
                tracing::info!(
                    path = %path.display(),
                    %mode,
                    "PNG has no embedded palette, using its colors"
                );
                raster_palette(path)
            }
            other => other.map_err(read_error),
        },
        PaletteSource::Raster => raster_palette(path),
    }
}

/// Distinct colors of a raster image, in packed RGB order.
///
/// At most 256 colors; an indexed image cannot address more.
fn raster_palette(path: &Path) -> Result<ColorPalette, RemapError> {
    let raster = decode_raster(path).map_err(|source| RemapError::DecodeImage {
        path: path.to_path_buf(),
        source,
    })?;
    let palette =
        ColorPalette::from_raster(raster.pixels()).map_err(|source| RemapError::ReadPalette {
            path: path.to_path_buf(),
            source,
        })?;
    if palette.len() > MAX_WINDOW {
        return Err(RemapError::ReadPalette {
            path: path.to_path_buf(),
            source: PaletteError::TooManyColors {
                count: palette.len(),
                max: MAX_WINDOW,
            },
        });
    }
    tracing::info!(
        path = %path.display(),
        colors = palette.len(),
        "Extracted palette from image"
    );
    Ok(palette)
}
