//! Test images, palettes and file helpers.

use std::path::{Path, PathBuf};

use northlight::imaging;
use palette_reducer::{Rgba, RgbaImage};

/// Palettes used across tests
pub mod palettes {
    use palette_reducer::Rgba;

    /// Transparent slot plus black and white
    pub const MONO: [Rgba; 3] = [Rgba::TRANSPARENT, Rgba(0x000000FF), Rgba(0xFFFFFFFF)];

    /// A small warm/cool ramp with a transparent slot
    pub const RAMP: [Rgba; 6] = [
        Rgba::TRANSPARENT,
        Rgba(0x000000FF),
        Rgba(0x4A84B5FF),
        Rgba(0xB54A00FF),
        Rgba(0xF7DEADFF),
        Rgba(0xFFFFFFFF),
    ];

    /// Hex strings for a palette, as a config file would hold them
    pub fn hex(colors: &[Rgba]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }
}

/// Diagonal RGB gradient whose blue channel moves with `phase`
pub fn gradient(width: usize, height: usize, phase: u8) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba::opaque(
            (x * 255 / width.max(2).saturating_sub(1)) as u8,
            (y * 255 / height.max(2).saturating_sub(1)) as u8,
            phase,
        )
    })
}

/// A filled square on a transparent background, offset by `shift` pixels
pub fn sprite(size: usize, shift: usize, color: Rgba) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let inside = |v: usize| v >= size / 4 + shift && v < size * 3 / 4 + shift;
        if inside(x) && inside(y) {
            color
        } else {
            Rgba::TRANSPARENT
        }
    })
}

/// A sequence of gradient frames with varying blue
pub fn animation(frames: usize, width: usize, height: usize) -> Vec<RgbaImage> {
    (0..frames)
        .map(|i| gradient(width, height, (i * 255 / frames.max(1)) as u8))
        .collect()
}

/// Write `image` as a PNG under `dir`, returning its path
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    imaging::save_png(&path, image).expect("Should write test PNG");
    path
}
