//! Automatic 16-color slot selection.

use super::error::QuantizeError;
use super::raster::Raster;
use super::{Quantized, Quantizer};
use crate::palette::ColorPalette;

/// Outcome of [`search_slots`].
#[derive(Debug, Clone)]
pub struct SlotSearch {
    /// The winning slot
    pub slot: usize,
    /// Quantization of the raster against the winning slot
    pub result: Quantized,
    /// Reported error of every slot, in slot order
    pub errors: Vec<f64>,
}

/// Quantize `raster` against every 16-entry slot of `palette` and keep the
/// best one.
///
/// Slots are evaluated in increasing order; a later slot only wins with a
/// strictly lower error, so the first minimal slot is selected.
///
/// # Errors
///
/// The first error reported by `quantizer` aborts the search.
pub fn search_slots(
    quantizer: &dyn Quantizer,
    raster: &Raster,
    palette: &ColorPalette,
) -> Result<SlotSearch, QuantizeError> {
    let mut best: Option<(usize, Quantized)> = None;
    let mut errors = Vec::with_capacity(palette.slot_count());

    for slot in 0..palette.slot_count() {
        let Some(window) = palette.slot(slot) else {
            break;
        };
        let result = quantizer.quantize(raster, window)?;
        tracing::debug!(slot, error = result.error, "Evaluated palette slot");
        errors.push(result.error);

        let better = best
            .as_ref()
            .map_or(true, |(_, current)| result.error < current.error);
        if better {
            best = Some((slot, result));
        }
    }

    let (slot, result) = best.ok_or(QuantizeError::EmptyWindow)?;
    tracing::info!(slot, error = result.error, "Selected palette slot");
    Ok(SlotSearch {
        slot,
        result,
        errors,
    })
}
