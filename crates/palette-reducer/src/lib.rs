// Generated LUT tables and byte-level hash code trip these lints
#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::manual_range_contains,
    clippy::too_many_arguments
)]

//! palette-reducer: palette reduction and dithering for indexed artwork
//!
//! This library maps true-color images onto a palette of at most 256
//! colors, optionally dithering so that gradients survive the reduction.
//!
//! # Quick Start
//!
//! The [`PaletteReducer`] facade is the primary entry point:
//!
//! ```
//! use palette_reducer::{PaletteReducer, Raster, Rgba, RgbaImage};
//!
//! let mut image = RgbaImage::from_fn(16, 16, |x, y| {
//!     Rgba::opaque((x * 16) as u8, (y * 16) as u8, 128)
//! });
//!
//! // Default: Aurora palette, Sierra Lite dithering
//! let mut reducer = PaletteReducer::new();
//! reducer.reduce(&mut image);
//!
//! assert!(image.pixels().iter().all(|p| reducer.table().colors().contains(p)));
//! ```
//!
//! # Lookup Tables
//!
//! Every palette is compiled into a [`PaletteTable`]: a dense map from each
//! 15-bit color (5 bits per channel) to its nearest palette index under a
//! [`ColorMetric`]. Building one walks all 32,768 coordinates once, so it
//! is by far the most expensive step; with the `parallel` feature the walk
//! is split across red planes with rayon. Reducing a pixel afterwards is a
//! single array read.
//!
//! Tables can be stored with [`palette::preload`] and loaded back with
//! [`PaletteTable::with_preload`] to skip the walk entirely.
//!
//! # Palettes From Images
//!
//! [`PaletteAnalyzer`] picks the most frequent colors of an image. When
//! there are more distinct colors than the budget, colors closer than a
//! threshold to one already picked are skipped.
//!
//! # Dithering Algorithms
//!
//! Nine algorithms are available via [`DitherAlgorithm`]:
//!
//! - Solid (no dithering)
//! - Sierra Lite (default), Floyd-Steinberg and Burkes error diffusion
//! - Noise-modulated Floyd-Steinberg
//! - Roberts, Roberts-Mul, Roberts-Edit and Shader-Mimic ordered dithering
//!
//! # Transparency
//!
//! Alpha is treated as a single bit (alpha >= 128 is opaque). A palette
//! whose slot 0 is [`Rgba::TRANSPARENT`] keeps transparent pixels
//! transparent; otherwise they are matched on their color like any other.

pub mod analyze;
pub mod api;
pub mod color;
pub mod dither;
pub mod metric;
pub mod palette;
pub mod raster;


pub use analyze::PaletteAnalyzer;
pub use api::PaletteReducer;
pub use color::{Lab, Rgba};
pub use dither::{
    Burkes, Dither, DitherAlgorithm, DitherStrength, ErrorRows, FloydSteinberg, NoiseDiffusion,
    Roberts, RobertsEdit, RobertsMul, ShaderMimic, SierraLite, Solid, UnknownAlgorithm,
};
pub use metric::{ColorMetric, UnknownMetric};
pub use palette::{PaletteError, PaletteTable, ParseColorError, AURORA};
pub use raster::{Raster, RasterError, RgbaImage};
