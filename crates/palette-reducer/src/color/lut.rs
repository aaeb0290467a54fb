//! Precomputed color tables
//!
//! The tables are generated at compile time by build.rs, so they are
//! immutable for the life of the process and need no runtime setup.

include!(concat!(env!("OUT_DIR"), "/color_tables.rs"));

/// Linear light for an 8-bit sRGB channel, using the piecewise sRGB curve.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}

/// Linear light for an 8-bit sRGB channel, using the power curve alone.
#[inline]
pub fn srgb_to_linear_rough(channel: u8) -> f64 {
    SRGB_TO_LINEAR_ROUGH[channel as usize]
}

/// Cube-root luma for `3r + 4g + b`.
#[inline]
pub fn ycwcm_luma(r: u8, g: u8, b: u8) -> f64 {
    YCWCM_LUMA[r as usize * 3 + g as usize * 4 + b as usize]
}

/// Signed chroma for the difference `x - y` of two channels.
#[inline]
pub fn ycwcm_chroma(x: u8, y: u8) -> f64 {
    YCWCM_CHROMA[(255 + x as i32 - y as i32) as usize]
}
