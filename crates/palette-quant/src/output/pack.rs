//! Index packing into 4- or 8-bit byte streams.

use super::bit_depth::BitDepth;

/// Pack indices as one continuous row-major stream.
///
/// - 8-bit: one byte per pixel, `index + range_min`
/// - 4-bit: two pixels per byte, first pixel in the high nibble; an odd
///   trailing pixel occupies the high nibble of the last byte. Indices are
///   window-relative and `range_min` is not applied.
///
/// # Example
///
/// ```
/// use palette_quant::output::pack_indices;
/// use palette_quant::BitDepth;
///
/// assert_eq!(pack_indices(&[5, 10], BitDepth::Four, 0), vec![0x5A]);
/// assert_eq!(pack_indices(&[5, 10], BitDepth::Eight, 16), vec![21, 26]);
/// ```
pub fn pack_indices(indices: &[u8], bit_depth: BitDepth, range_min: u8) -> Vec<u8> {
    match bit_depth {
        BitDepth::Eight => indices.iter().map(|&i| i.wrapping_add(range_min)).collect(),
        BitDepth::Four => indices
            .chunks(2)
            .map(|pair| {
                let high = (pair[0] & 0x0F) << 4;
                let low = pair.get(1).map_or(0, |&i| i & 0x0F);
                high | low
            })
            .collect(),
    }
}

/// Pack indices row by row, restarting at a byte boundary on every row.
///
/// This is the scanline layout indexed PNG expects; for even widths it is
/// identical to [`pack_indices`].
pub fn pack_scanlines(indices: &[u8], width: u32, bit_depth: BitDepth, range_min: u8) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let row_bytes = bit_depth.row_bytes(width);
    let rows = indices.len() / width as usize;
    let mut packed = Vec::with_capacity(row_bytes * rows);
    for row in indices.chunks(width as usize) {
        packed.extend(pack_indices(row, bit_depth, range_min));
    }
    packed
}
