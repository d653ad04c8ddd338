//! GIMP palette (.gpl)
//!
//! Header line `GIMP Palette`, optional `Name:`/`Columns:`/`Channels:`
//! attributes, `#` comments, then one `R G B [name]` entry per line.
//! Entries whose channels do not parse are skipped.

use super::numbered_lines;
use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::{ColorPalette, PaletteFormat};

const MAGIC: &str = "GIMP Palette";
const ATTRIBUTES: [&str; 3] = ["Name:", "Columns:", "Channels:"];

fn parse_entry(line: &str) -> Option<Color> {
    let mut tokens = line.split_whitespace();
    let r = tokens.next()?.parse::<u8>().ok()?;
    let g = tokens.next()?.parse::<u8>().ok()?;
    let b = tokens.next()?.parse::<u8>().ok()?;
    Some(Color::rgb(r, g, b))
}

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = numbered_lines(&text);

    match lines.next() {
        Some((_, header)) if header.trim() == MAGIC => {}
        _ => {
            return Err(PaletteError::Malformed {
                format: PaletteFormat::Gimp,
                reason: format!("missing {MAGIC:?} header"),
            })
        }
    }

    let mut colors = Vec::new();
    for (n, line) in lines {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('#')
            || ATTRIBUTES.iter().any(|attr| line.starts_with(attr))
        {
            continue;
        }
        match parse_entry(line) {
            Some(color) => colors.push(color),
            None => tracing::debug!(line = n, text = line, "Skipping unparseable GIMP entry"),
        }
    }

    ColorPalette::new(colors)
}

pub(super) fn encode(palette: &ColorPalette, name: &str) -> Vec<u8> {
    let mut out = format!("{MAGIC}\nName: {name}\nColumns: 0\n#\n");
    for color in palette.colors() {
        out.push_str(&format!(
            "{:3} {:3} {:3}\tUntitled\n",
            color.r, color.g, color.b
        ));
    }
    out.into_bytes()
}
