//! palremap - remap images onto fixed legacy palettes
//!
//! Command-line front end for the `palette-quant` crate. This library
//! exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
