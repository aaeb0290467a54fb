//! Raster images the reducer reads and rewrites in place.

use std::fmt;

use crate::color::Rgba;

/// A mutable pixel grid of packed [`Rgba`] colors.
///
/// Ditherers take `&mut dyn Raster` and overwrite every pixel, so passing an
/// image hands over write access for the duration of the call.
pub trait Raster {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Read the pixel at `(x, y)`. Coordinates are always in bounds.
    fn pixel(&self, x: usize, y: usize) -> Rgba;

    /// Overwrite the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba);

    /// Enable or disable alpha blending on writes, returning the previous
    /// setting. Rasters without a blending mode ignore this.
    fn set_blending(&mut self, _enabled: bool) -> bool {
        false
    }
}

/// Error for raster construction from raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The byte buffer does not hold exactly `width * height` RGBA pixels
    BufferSize {
        /// Required byte count
        expected: usize,
        /// Supplied byte count
        actual: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "RGBA buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// An owned, row-major image.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RgbaImage {
    /// Create a fully transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap bytes in R, G, B, A order.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, RasterError> {
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba::from_channels(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten to bytes in R, G, B, A order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.0.to_be_bytes()).collect()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

impl Raster for RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        self.pixels[y * self.width + x] = color;
    }
}

/// Copy row `y` of `image` into `out` as R, G, B, A bytes.
///
/// `out` must hold at least `image.width() * 4` bytes.
pub fn row_bytes(image: &dyn Raster, y: usize, out: &mut [u8]) {
    for x in 0..image.width() {
        out[x * 4..x * 4 + 4].copy_from_slice(&image.pixel(x, y).0.to_be_bytes());
    }
}
