pub mod palette_source;
pub mod pipeline;

pub use palette_source::{load_palette, PaletteSource};
pub use pipeline::{run_convert, run_remap};
