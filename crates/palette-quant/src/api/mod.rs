//! Public API for the palette-quant crate.
//!
//! This module provides the high-level API: the [`Remapper`] builder, its
//! [`Window`] selector and the unified [`Error`] type.

mod builder;
mod error;

pub use builder::{Remapper, Window};
pub use error::Error;
