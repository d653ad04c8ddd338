//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decoded indexed PNG.
pub struct IndexedPng {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    /// Raw scanline bytes
    pub data: Vec<u8>,
    /// PLTE as RGB triplets
    pub plte: Vec<[u8; 3]>,
    pub trns: Option<Vec<u8>>,
}

impl IndexedPng {
    /// Unpack the index of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> u8 {
        match self.bit_depth {
            4 => {
                let row_bytes = (self.width as usize).div_ceil(2);
                let byte = self.data[y as usize * row_bytes + x as usize / 2];
                if x % 2 == 0 {
                    byte >> 4
                } else {
                    byte & 0x0F
                }
            }
            _ => self.data[(y * self.width + x) as usize],
        }
    }

    /// All pixel indices, row-major.
    pub fn indices(&self) -> Vec<u8> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.index(x, y))
            .collect()
    }
}

/// Decode `path` and assert it is an indexed PNG.
pub fn read_indexed_png(path: &Path) -> IndexedPng {
    let file = std::fs::File::open(path).expect("open output");
    let mut reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .expect("valid PNG header");
    let (width, height) = (reader.info().width, reader.info().height);
    let plte = reader
        .info()
        .palette
        .as_deref()
        .expect("PLTE chunk")
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    let trns = reader.info().trns.as_deref().map(<[u8]>::to_vec);
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("image data");
    data.truncate(info.buffer_size());
    assert_eq!(info.color_type, png::ColorType::Indexed);
    IndexedPng {
        width,
        height,
        bit_depth: info.bit_depth as u8,
        data,
        plte,
        trns,
    }
}
