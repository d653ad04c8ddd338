//! Palette embedded in an indexed PNG (PLTE + tRNS).

use std::io::Cursor;

use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::ColorPalette;

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let reader = ::png::Decoder::new(Cursor::new(bytes)).read_info()?;
    let info = reader.info();

    if info.color_type != ::png::ColorType::Indexed {
        return Err(PaletteError::UnsupportedColorMode(format!(
            "{:?} PNG has no palette",
            info.color_type
        )));
    }
    let plte = info.palette.as_deref().ok_or_else(|| {
        PaletteError::UnsupportedColorMode("indexed PNG without PLTE".to_string())
    })?;

    let colors: Vec<Color> = plte
        .chunks_exact(3)
        .map(|rgb| Color::rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    let transparent = info
        .trns
        .as_deref()
        .and_then(|alphas| alphas.iter().position(|&a| a == 0))
        .filter(|&i| i < colors.len());

    ColorPalette::new(colors)?.with_transparent_index(transparent)
}
