//! Palette file codec
//!
//! Reading is content-driven: [`sniff`] is the single place that inspects
//! magic bytes, and [`decode_palette`] dispatches on its result. Writing
//! takes an explicit [`PaletteFormat`].
//!
//! | Format    | Detection              | Transparency          |
//! |-----------|------------------------|-----------------------|
//! | RIFF-PAL  | `RIFF`                 | none                  |
//! | JASC-PAL  | `JASC-PAL`             | none                  |
//! | GIMP      | `GIMP Palette`         | none                  |
//! | Paint.NET | leading `;`            | none (alpha ignored)  |
//! | PNG       | PNG signature          | first tRNS alpha 0    |
//! | ACT       | anything else          | big-endian trailer    |
//!
//! # Example
//!
//! ```
//! use palette_quant::palette::codec::{decode_palette, encode_palette};
//! use palette_quant::{Color, ColorPalette, PaletteFormat};
//!
//! let palette = ColorPalette::new(vec![Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]).unwrap();
//! let bytes = encode_palette(&palette, PaletteFormat::Jasc, "demo.pal");
//! let back = decode_palette(&bytes).unwrap();
//! assert_eq!(back.colors(), palette.colors());
//! ```

mod act;
mod embedded;
mod gimp;
mod jasc;
mod paint_net;
mod riff;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::PaletteError;
use super::palette::{ColorPalette, PaletteFormat};
use crate::fs::write_atomic;

/// Number of leading bytes examined when sniffing a palette file.
pub const SNIFF_LEN: usize = 256;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Result of content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sniffed {
    /// A legacy palette file
    Format(PaletteFormat),
    /// A PNG whose embedded PLTE chunk should be used
    EmbeddedPng,
}

/// Classify palette content from its leading bytes.
///
/// Only the first [`SNIFF_LEN`] bytes are considered. Anything not
/// recognized is treated as a raw ACT table.
pub fn sniff(head: &[u8]) -> Sniffed {
    let head = &head[..head.len().min(SNIFF_LEN)];
    if head.starts_with(b"RIFF") {
        Sniffed::Format(PaletteFormat::Riff)
    } else if head.starts_with(b"JASC-PAL") {
        Sniffed::Format(PaletteFormat::Jasc)
    } else if head.starts_with(b"GIMP Palette") {
        Sniffed::Format(PaletteFormat::Gimp)
    } else if head.starts_with(b";") {
        Sniffed::Format(PaletteFormat::PaintNet)
    } else if head.starts_with(PNG_SIGNATURE) {
        Sniffed::EmbeddedPng
    } else {
        Sniffed::Format(PaletteFormat::Act)
    }
}

/// Decode a palette from an in-memory file image.
///
/// # Errors
///
/// Any [`PaletteError`] from the format-specific reader. No partial palette
/// is ever returned.
pub fn decode_palette(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let sniffed = sniff(bytes);
    tracing::debug!(?sniffed, len = bytes.len(), "Sniffed palette content");
    match sniffed {
        Sniffed::Format(PaletteFormat::Act) => act::decode(bytes),
        Sniffed::Format(PaletteFormat::Riff) => riff::decode(bytes),
        Sniffed::Format(PaletteFormat::Jasc) => jasc::decode(bytes),
        Sniffed::Format(PaletteFormat::Gimp) => gimp::decode(bytes),
        Sniffed::Format(PaletteFormat::PaintNet) => paint_net::decode(bytes),
        Sniffed::EmbeddedPng => embedded::decode(bytes),
    }
}

/// Read and decode a palette file.
///
/// # Errors
///
/// [`PaletteError::Io`] when the file cannot be opened or read, otherwise
/// whatever [`decode_palette`] reports.
pub fn read_palette(path: impl AsRef<Path>) -> Result<ColorPalette, PaletteError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    let palette = decode_palette(&bytes)?;
    tracing::info!(
        path = %path.display(),
        colors = palette.len(),
        transparent = ?palette.transparent_index(),
        "Loaded palette"
    );
    Ok(palette)
}

/// Encode a palette in `format`.
///
/// `name` is embedded by the text formats that carry a title line (GIMP,
/// Paint.NET); binary formats ignore it.
pub fn encode_palette(palette: &ColorPalette, format: PaletteFormat, name: &str) -> Vec<u8> {
    match format {
        PaletteFormat::Act => act::encode(palette),
        PaletteFormat::Riff => riff::encode(palette),
        PaletteFormat::Jasc => jasc::encode(palette),
        PaletteFormat::Gimp => gimp::encode(palette, name),
        PaletteFormat::PaintNet => paint_net::encode(palette, name),
    }
}

/// Encode a palette and write it to `path`.
///
/// The file is committed atomically: on failure the destination is left
/// untouched.
pub fn write_palette(
    path: impl AsRef<Path>,
    palette: &ColorPalette,
    format: PaletteFormat,
) -> Result<(), PaletteError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = encode_palette(palette, format, &name);
    write_atomic(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        %format,
        colors = palette.len(),
        "Wrote palette"
    );
    Ok(())
}

/// Split decoded text into `(line_number, line)` pairs, numbering from 1.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}
