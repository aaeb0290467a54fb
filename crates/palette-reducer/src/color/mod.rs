//! Color types and color-space helpers
//!
//! [`Rgba`] is the packed pixel format used throughout the crate. The
//! [`lab`] and [`lut`] modules hold the numeric conversions the color
//! metrics need.

pub mod lab;
mod lut;
mod rgba;

pub use lab::{to_lab, to_lab_rough, Lab};
pub(crate) use lut::{ycwcm_chroma, ycwcm_luma};
pub use rgba::{table_index_of, Rgba};
