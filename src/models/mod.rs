pub mod config;

pub use config::{Overrides, PaletteRange, QuantizerChoice, RemapConfig, SlotChoice};
