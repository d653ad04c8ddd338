//! Paint.NET palette (.txt)
//!
//! Lines starting with `;` are comments. Every other non-blank line holds
//! one color as `AARRGGBB` hex; the alpha byte is ignored.

use super::numbered_lines;
use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::{ColorPalette, PaletteFormat};

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let text = String::from_utf8_lossy(bytes);
    let mut colors = Vec::new();

    for (n, line) in numbered_lines(&text) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let token = line.split_whitespace().next().unwrap_or(line);
        let value = if token.len() <= 8 {
            u32::from_str_radix(token, 16).ok()
        } else {
            None
        };
        let Some(value) = value else {
            return Err(PaletteError::Malformed {
                format: PaletteFormat::PaintNet,
                reason: format!("line {n}: invalid hex color {token:?}"),
            });
        };
        colors.push(Color::from_packed_rgb(value & 0x00FF_FFFF));
    }

    ColorPalette::new(colors)
}

pub(super) fn encode(palette: &ColorPalette, name: &str) -> Vec<u8> {
    let mut out = format!("; Paint.NET Palette\n; {name}\n");
    for color in palette.colors() {
        out.push_str(&format!("{:08X}\n", color.packed_rgb()));
    }
    out.into_bytes()
}
