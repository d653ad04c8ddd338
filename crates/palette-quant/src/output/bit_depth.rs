use std::fmt;

/// Bits per pixel of an indexed output raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Two pixels per byte, window of at most 16 colors
    Four,
    /// One pixel per byte, master palette indices up to 255
    Eight,
}

impl BitDepth {
    /// Parse a numeric bit count (4 or 8).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            4 => Some(BitDepth::Four),
            8 => Some(BitDepth::Eight),
            _ => None,
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::Four => 4,
            BitDepth::Eight => 8,
        }
    }

    /// Number of distinct indices a pixel can hold.
    #[inline]
    pub fn max_entries(self) -> usize {
        1 << self.bits()
    }

    /// Packed bytes needed for one row of `width` pixels.
    #[inline]
    pub fn row_bytes(self, width: u32) -> usize {
        (width as usize * self.bits() as usize).div_ceil(8)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
