//! Remapper builder: the primary entry point for the crate.
//!
//! [`Remapper`] wraps window selection, quantization and output validation
//! behind a fluent builder.

use std::fmt;
use std::ops::RangeInclusive;

use super::error::Error;
use crate::output::{BitDepth, QuantizedRaster};
use crate::palette::{ColorPalette, SLOT_SIZE};
use crate::quantize::{search_slots, QuantizeError, Quantized, Raster, Strategy};

/// Which part of the palette a raster is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// The whole palette
    #[default]
    Full,
    /// Entries `min..=max`
    Range { min: usize, max: usize },
    /// The 16-entry slot `n` (entries `16n..=16n+15`, clipped)
    Slot(usize),
    /// The slot with the lowest quantization error
    AutoSlot,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Full => f.write_str("full palette"),
            Window::Range { min, max } => write!(f, "range {min}-{max}"),
            Window::Slot(n) => write!(f, "slot {n}"),
            Window::AutoSlot => f.write_str("auto slot"),
        }
    }
}

/// Palette remapping builder.
///
/// - The constructor takes the [`ColorPalette`]; it is never modified
/// - Configuration methods consume and return `self`
/// - [`remap()`](Self::remap) takes `&self`, so one remapper serves many rasters
///
/// # Example
///
/// ```
/// use palette_quant::{BitDepth, Color, ColorPalette, Raster, Remapper, Window};
///
/// let palette = ColorPalette::new(vec![Color::BLACK, Color::WHITE]).unwrap();
/// let raster = Raster::new(2, 1, vec![Color::rgb(240, 240, 240), Color::rgb(20, 20, 20)]).unwrap();
///
/// let result = Remapper::new(palette)
///     .window(Window::Full)
///     .bit_depth(Some(BitDepth::Four))
///     .remap(&raster)
///     .unwrap();
///
/// assert_eq!(result.indices(), &[1, 0]);
/// assert_eq!(result.packed(), vec![0x10]);
/// ```
#[derive(Debug, Clone)]
pub struct Remapper {
    palette: ColorPalette,
    strategy: Strategy,
    window: Window,
    bit_depth: Option<BitDepth>,
}

impl Remapper {
    /// Create a remapper over `palette`.
    ///
    /// Defaults: nearest-color strategy, whole palette, automatic bit depth.
    pub fn new(palette: ColorPalette) -> Self {
        Self {
            palette,
            strategy: Strategy::default(),
            window: Window::default(),
            bit_depth: None,
        }
    }

    /// Set the quantization strategy.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the palette window.
    #[inline]
    pub fn window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Force the output bit depth.
    ///
    /// `None` picks 4 bits when the window has at most 16 entries and
    /// 8 bits otherwise.
    #[inline]
    pub fn bit_depth(mut self, bit_depth: Option<BitDepth>) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// The palette this remapper matches against.
    #[inline]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Resolve a fixed window to master palette bounds.
    fn bounds(&self) -> Result<RangeInclusive<usize>, QuantizeError> {
        let len = self.palette.len();
        let (min, max) = match self.window {
            Window::Full | Window::AutoSlot => (0, len - 1),
            Window::Range { min, max } => (min, max),
            Window::Slot(n) => {
                return self.palette.slot_bounds(n).ok_or(QuantizeError::InvalidRange {
                    min: n.saturating_mul(SLOT_SIZE),
                    max: n.saturating_mul(SLOT_SIZE).saturating_add(SLOT_SIZE - 1),
                    len,
                });
            }
        };
        if min > max || max >= len {
            return Err(QuantizeError::InvalidRange { min, max, len });
        }
        Ok(min..=max)
    }

    fn resolve_depth(&self, bounds: &RangeInclusive<usize>) -> BitDepth {
        self.bit_depth.unwrap_or_else(|| {
            if bounds.end() - bounds.start() < BitDepth::Four.max_entries() {
                BitDepth::Four
            } else {
                BitDepth::Eight
            }
        })
    }

    /// Fail early when the chosen depth cannot address the window.
    fn check_addressable(
        &self,
        bounds: &RangeInclusive<usize>,
        depth: BitDepth,
    ) -> Result<(), QuantizeError> {
        let (min, max) = (*bounds.start(), *bounds.end());
        let ok = match depth {
            BitDepth::Four => max - min < depth.max_entries(),
            BitDepth::Eight => max < depth.max_entries(),
        };
        if ok {
            Ok(())
        } else {
            Err(QuantizeError::WindowTooLarge {
                bits: depth.bits(),
                min,
                max,
            })
        }
    }

    /// Quantize `raster` against the configured window.
    ///
    /// 1. Resolve the window (searching every slot for [`Window::AutoSlot`])
    /// 2. Check the bit depth can address it
    /// 3. Quantize with the configured [`Strategy`]
    /// 4. Wrap the indices in a [`QuantizedRaster`]
    pub fn remap(&self, raster: &Raster) -> Result<QuantizedRaster, Error> {
        let quantizer = self.strategy.quantizer();

        let (bounds, result): (RangeInclusive<usize>, Quantized) = match self.window {
            Window::AutoSlot => {
                let search = search_slots(quantizer, raster, &self.palette)?;
                let bounds = self
                    .palette
                    .slot_bounds(search.slot)
                    .ok_or(QuantizeError::EmptyWindow)?;
                (bounds, search.result)
            }
            _ => {
                let bounds = self.bounds()?;
                let depth = self.resolve_depth(&bounds);
                self.check_addressable(&bounds, depth)?;
                let window = self
                    .palette
                    .window(bounds.clone())
                    .ok_or(QuantizeError::EmptyWindow)?;
                (bounds, quantizer.quantize(raster, window)?)
            }
        };

        let depth = self.resolve_depth(&bounds);
        tracing::info!(
            strategy = %self.strategy,
            window = %self.window,
            min = bounds.start(),
            max = bounds.end(),
            bits = depth.bits(),
            error = result.error,
            "Remapped raster"
        );
        let quantized = QuantizedRaster::new(
            raster.width(),
            raster.height(),
            result.indices,
            &self.palette,
            bounds,
            depth,
            result.error,
        )?;
        Ok(quantized)
    }
}
