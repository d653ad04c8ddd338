//! Microsoft RIFF palette (.pal)
//!
//! ```text
//! offset  size  field
//!      0     4  "RIFF"
//!      4     4  RIFF size (LE, bytes after this field)
//!      8     4  "PAL "
//!     12     4  "data"
//!     16     4  data chunk size (LE)
//!     20     2  version 0x0300 (LE)
//!     22     2  entry count (LE)
//!     24   4*n  R, G, B, flags (flags written as 0, ignored on read)
//! ```
//!
//! Sub-chunks preceding `data` are skipped. The declared size of the `data`
//! chunk itself is not trusted (some writers leave it uninitialized); the
//! entry count governs how many records are read.

use crate::color::Color;
use crate::palette::error::PaletteError;
use crate::palette::palette::{ColorPalette, PaletteFormat};

const FORM_TYPE: &[u8; 4] = b"PAL ";
const DATA_CHUNK: &[u8; 4] = b"data";
const VERSION: u16 = 0x0300;
const CHUNK_HEADER_LEN: usize = 8;
const RECORD_LEN: usize = 4;

fn read_u16_le(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn truncated(expected: usize, found: usize) -> PaletteError {
    PaletteError::TruncatedData {
        format: PaletteFormat::Riff,
        expected,
        found,
    }
}

/// Locate the payload of the `data` chunk (everything after its header).
fn find_data_chunk(bytes: &[u8]) -> Result<&[u8], PaletteError> {
    if bytes.len() < 12 {
        return Err(truncated(0, 0));
    }
    if &bytes[8..12] != FORM_TYPE {
        return Err(PaletteError::UnsupportedFormat(format!(
            "RIFF form type {:?} is not a palette",
            String::from_utf8_lossy(&bytes[8..12])
        )));
    }

    let mut pos = 12;
    while pos + CHUNK_HEADER_LEN <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let size = read_u32_le(bytes, pos + 4) as usize;
        if id == DATA_CHUNK {
            return Ok(&bytes[pos + CHUNK_HEADER_LEN..]);
        }
        tracing::debug!(
            chunk = %String::from_utf8_lossy(id),
            size,
            "Skipping RIFF chunk"
        );
        // Chunks are word aligned
        pos = pos
            .saturating_add(CHUNK_HEADER_LEN)
            .saturating_add(size)
            .saturating_add(size & 1);
    }

    Err(PaletteError::Malformed {
        format: PaletteFormat::Riff,
        reason: "no data chunk".to_string(),
    })
}

pub(super) fn decode(bytes: &[u8]) -> Result<ColorPalette, PaletteError> {
    let data = find_data_chunk(bytes)?;
    if data.len() < 4 {
        return Err(truncated(0, 0));
    }

    let version = read_u16_le(data, 0);
    if version != VERSION {
        tracing::debug!(version, "Unexpected RIFF palette version");
    }
    let count = read_u16_le(data, 2) as usize;
    let records = &data[4..];
    let available = records.len() / RECORD_LEN;
    if available < count {
        return Err(truncated(count, available));
    }

    let colors = records
        .chunks_exact(RECORD_LEN)
        .take(count)
        .map(|rec| Color::rgb(rec[0], rec[1], rec[2]))
        .collect();
    ColorPalette::new(colors)
}

pub(super) fn encode(palette: &ColorPalette) -> Vec<u8> {
    let count = palette.len();
    let data_len = 4 + count * RECORD_LEN;
    let riff_len = FORM_TYPE.len() + CHUNK_HEADER_LEN + data_len;

    let mut out = Vec::with_capacity(CHUNK_HEADER_LEN + riff_len);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(riff_len as u32).to_le_bytes());
    out.extend_from_slice(FORM_TYPE);
    out.extend_from_slice(DATA_CHUNK);
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(count as u16).to_le_bytes());
    for color in palette.colors() {
        out.extend_from_slice(&[color.r, color.g, color.b, 0x00]);
    }
    out
}
