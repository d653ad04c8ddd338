//! Deduplicated, pre-converted candidate colors for nearest-color search.

use std::collections::HashSet;

use super::error::QuantizeError;
use crate::color::{ciede2000, Color, Lab};

/// Largest window a quantizer can address (indices are `u8`).
pub const MAX_WINDOW: usize = 256;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: u8,
    lab: Lab,
}

/// Unique colors of a palette window, each converted to Lab once.
///
/// Every candidate remembers the first window-relative index its color
/// appeared at, so duplicate palette entries are searched only once and a
/// match always reports the lowest index holding that color.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Build the candidate set for `window`.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::EmptyWindow`] for an empty window
    /// - [`QuantizeError::WindowTooLarge`] beyond [`MAX_WINDOW`] entries
    pub fn new(window: &[Color]) -> Result<Self, QuantizeError> {
        if window.is_empty() {
            return Err(QuantizeError::EmptyWindow);
        }
        if window.len() > MAX_WINDOW {
            return Err(QuantizeError::WindowTooLarge {
                bits: 8,
                min: 0,
                max: window.len() - 1,
            });
        }

        let mut seen = HashSet::with_capacity(window.len());
        let candidates: Vec<Candidate> = window
            .iter()
            .enumerate()
            .filter(|(_, color)| seen.insert(color.packed_rgb()))
            .map(|(index, &color)| Candidate {
                index: index as u8,
                lab: Lab::from(color),
            })
            .collect();

        if candidates.len() < window.len() {
            tracing::debug!(
                window = window.len(),
                unique = candidates.len(),
                "Collapsed duplicate palette entries"
            );
        }
        Ok(Self { candidates })
    }

    /// Number of unique candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Window index and CIEDE2000 distance of the closest candidate.
    ///
    /// Only a strictly smaller distance replaces the current best, so ties
    /// go to the candidate seen first (the lowest window index).
    pub fn nearest(&self, lab: Lab) -> (u8, f32) {
        let mut best = (0u8, f32::INFINITY);
        for candidate in &self.candidates {
            let distance = ciede2000(lab, candidate.lab);
            if distance < best.1 {
                best = (candidate.index, distance);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_rejected() {
        assert!(matches!(
            CandidateSet::new(&[]),
            Err(QuantizeError::EmptyWindow)
        ));
    }

    #[test]
    fn test_oversized_window_rejected() {
        let window = vec![Color::BLACK; MAX_WINDOW + 1];
        assert!(matches!(
            CandidateSet::new(&window),
            Err(QuantizeError::WindowTooLarge { .. })
        ));
    }

    #[test]
    fn test_duplicates_collapse_to_first_index() {
        let window = [Color::WHITE, Color::BLACK, Color::rgba(0, 0, 0, 7), Color::WHITE];
        let set = CandidateSet::new(&window).unwrap();
        assert_eq!(set.len(), 2);
        let (index, distance) = set.nearest(Lab::from(Color::BLACK));
        assert_eq!(index, 1);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_nearest_picks_closest() {
        let window = [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
        ];
        let set = CandidateSet::new(&window).unwrap();
        assert_eq!(set.nearest(Lab::from(Color::rgb(20, 30, 220))).0, 2);
        assert_eq!(set.nearest(Lab::from(Color::rgb(200, 40, 40))).0, 0);
    }
}
