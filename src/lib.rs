//! Northlight - palette reduction for pixel art and animation
//!
//! Reduces PNG frames to a shared palette with the `palette-reducer` crate
//! and writes the results as still PNGs or looping APNGs.
//! This library exposes modules for integration testing.

pub mod encoding;
pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
