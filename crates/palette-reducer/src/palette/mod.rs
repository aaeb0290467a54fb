//! Palettes and their lookup tables
//!
//! This module provides [`PaletteTable`], the default Aurora palette, the
//! preload text format, and the error types for color parsing and preload
//! validation.

mod aurora;
mod error;
pub mod preload;
mod table;

pub use aurora::AURORA;
pub use error::{PaletteError, ParseColorError};
pub use table::{PaletteTable, PALETTE_CAPACITY, TABLE_SIZE};
