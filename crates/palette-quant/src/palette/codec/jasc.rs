//! Paint Shop Pro palette (JASC-PAL)
//!
//! ```text
//! JASC-PAL
//! 0100
//! <count>
//! <r> <g> <b>      (count lines)
//! ```

use super::numbered_lines;
use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::{ColorPalette, PaletteFormat};

const MAGIC: &str = "JASC-PAL";
const VERSION: &str = "0100";

fn malformed(line: usize, reason: impl std::fmt::Display) -> PaletteError {
    PaletteError::Malformed {
        format: PaletteFormat::Jasc,
        reason: format!("line {line}: {reason}"),
    }
}

fn parse_channel(token: Option<&str>, line: usize) -> Result<u8, PaletteError> {
    let token = token.ok_or_else(|| malformed(line, "expected three channel values"))?;
    token
        .parse::<u8>()
        .map_err(|_| malformed(line, format!("invalid channel value {token:?}")))
}

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = numbered_lines(&text)
        .map(|(n, line)| (n, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, MAGIC)) => {}
        Some((n, other)) => return Err(malformed(n, format!("expected {MAGIC}, got {other:?}"))),
        None => return Err(PaletteError::EmptyPalette),
    }

    let (n, version) = lines.next().ok_or(PaletteError::TruncatedData {
        format: PaletteFormat::Jasc,
        expected: 1,
        found: 0,
    })?;
    if version != VERSION {
        return Err(malformed(n, format!("unsupported version {version:?}")));
    }

    let (n, count) = lines.next().ok_or(PaletteError::TruncatedData {
        format: PaletteFormat::Jasc,
        expected: 1,
        found: 0,
    })?;
    let count: usize = count
        .parse()
        .map_err(|_| malformed(n, format!("invalid color count {count:?}")))?;

    let mut colors = Vec::with_capacity(count.min(crate::palette::MAX_COLORS));
    for _ in 0..count {
        let Some((n, line)) = lines.next() else {
            return Err(PaletteError::TruncatedData {
                format: PaletteFormat::Jasc,
                expected: count,
                found: colors.len(),
            });
        };
        let mut tokens = line.split_whitespace();
        let r = parse_channel(tokens.next(), n)?;
        let g = parse_channel(tokens.next(), n)?;
        let b = parse_channel(tokens.next(), n)?;
        colors.push(Color::rgb(r, g, b));
    }

    ColorPalette::new(colors)
}

pub(super) fn encode(palette: &ColorPalette) -> Vec<u8> {
    let mut out = format!("{MAGIC}\n{VERSION}\n{}\n", palette.len());
    for color in palette.colors() {
        out.push_str(&format!("{} {} {}\n", color.r, color.g, color.b));
    }
    out.into_bytes()
}
