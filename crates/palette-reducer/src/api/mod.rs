//! Public API for the palette-reducer crate.
//!
//! This module provides the high-level [`PaletteReducer`] facade.

mod reducer;

pub use reducer::PaletteReducer;
