//! Adobe Color Table (.act)
//!
//! 256 RGB triplets (768 bytes). Files exactly 772 bytes long carry a
//! trailer of two big-endian u16 values: the number of used colors and the
//! transparent index (0xFFFF for none). The trailer is decoded with fixed
//! big-endian byte order regardless of host.

use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::{ColorPalette, PaletteFormat};

const ENTRIES: usize = 256;
const TABLE_LEN: usize = ENTRIES * 3;
const TRAILER_LEN: usize = 4;
const NO_TRANSPARENCY: u16 = 0xFFFF;

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    if bytes.len() < TABLE_LEN {
        return Err(PaletteError::TruncatedData {
            format: PaletteFormat::Act,
            expected: ENTRIES,
            found: bytes.len() / 3,
        });
    }

    let mut colors: Vec<Color> = bytes[..TABLE_LEN]
        .chunks_exact(3)
        .map(|rgb| Color::rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    let mut transparent = None;
    if bytes.len() == TABLE_LEN + TRAILER_LEN {
        let trailer = &bytes[TABLE_LEN..];
        let count = u16::from_be_bytes([trailer[0], trailer[1]]) as usize;
        let index = u16::from_be_bytes([trailer[2], trailer[3]]);

        if count == 0 || count > ENTRIES {
            return Err(PaletteError::Malformed {
                format: PaletteFormat::Act,
                reason: format!("trailer declares {count} colors (expected 1..=256)"),
            });
        }
        colors.truncate(count);

        if index != NO_TRANSPARENCY {
            let index = index as usize;
            if index < count {
                transparent = Some(index);
            } else {
                tracing::warn!(index, count, "ACT transparent index out of range, ignoring");
            }
        }
    } else if bytes.len() > TABLE_LEN {
        tracing::debug!(
            extra = bytes.len() - TABLE_LEN,
            "Ignoring trailing bytes after ACT color table"
        );
    }

    ColorPalette::new(colors)?.with_transparent_index(transparent)
}

pub(super) fn encode(palette: &ColorPalette) -> Vec<u8> {
    let mut out = Vec::with_capacity(TABLE_LEN + TRAILER_LEN);
    for i in 0..ENTRIES {
        let rgb = palette.get(i).map(Color::to_rgb_bytes).unwrap_or([0, 0, 0]);
        out.extend_from_slice(&rgb);
    }

    let count = palette.len().min(ENTRIES);
    let transparent = palette.transparent_index().filter(|&index| {
        let kept = index < count;
        if !kept {
            tracing::warn!(index, count, "Transparent index beyond ACT table, dropping it");
        }
        kept
    });
    if transparent.is_some() || count < ENTRIES {
        out.extend_from_slice(&(count as u16).to_be_bytes());
        let index = transparent.map_or(NO_TRANSPARENCY, |i| i as u16);
        out.extend_from_slice(&index.to_be_bytes());
    }
    out
}
