//! Palette reduction with and without dithering.
//!
//! Every algorithm rewrites a [`Raster`] in place so that it only holds
//! colors from a [`PaletteTable`]. They share the same per-pixel
//! preprocessing: each channel keeps its top 5 bits and refills the low 3
//! (see [`Rgba::quantized`]), and a transparent pixel is written as slot 0
//! when the palette reserves slot 0 for transparency.
//!
//! # Algorithms
//!
//! - **Error diffusion**: [`SierraLite`] (default), [`FloydSteinberg`],
//!   [`Burkes`] and [`NoiseDiffusion`] push each pixel's quantization error
//!   onto unvisited neighbors through an [`ErrorRows`] workspace.
//! - **Ordered**: [`Roberts`], [`RobertsMul`], [`RobertsEdit`] and
//!   [`ShaderMimic`] offset channels by a hash of the pixel coordinates and
//!   carry no state between pixels.
//! - **None**: [`Solid`] maps every pixel straight to its nearest color.
//!
//! # Example
//!
//! ```
//! use palette_reducer::{
//!     ColorMetric, Dither, DitherStrength, ErrorRows, PaletteTable, Raster, Rgba, RgbaImage,
//!     SierraLite,
//! };
//!
//! let table = PaletteTable::new(
//!     &[Rgba::TRANSPARENT, Rgba(0x000000FF), Rgba(0xFFFFFFFF)],
//!     ColorMetric::default(),
//! );
//! let mut image = RgbaImage::from_fn(8, 8, |_, _| Rgba(0x808080FF));
//! let mut rows = ErrorRows::new();
//!
//! SierraLite.reduce(&mut image, &table, &mut rows, DitherStrength::default());
//!
//! assert!(image.pixels().iter().all(|&p| table.colors().contains(&p)));
//! ```

mod burkes;
mod floyd_steinberg;
mod kernel;
mod noise;
mod ordered;
mod sierra;
mod solid;

pub use burkes::Burkes;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use noise::NoiseDiffusion;
pub use ordered::{Roberts, RobertsEdit, RobertsMul, ShaderMimic};
pub use sierra::SierraLite;
pub use solid::Solid;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;
use crate::palette::PaletteTable;
use crate::raster::Raster;

/// A palette reduction algorithm.
///
/// Implementors overwrite every pixel of `image` with a color from `table`.
/// Algorithms without error diffusion leave `rows` untouched.
pub trait Dither {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        rows: &mut ErrorRows,
        strength: DitherStrength,
    );
}

/// Scaled dither strength.
///
/// A user strength `s` becomes `full = 0.5 * s` and `half = 0.25 * s`. The
/// kernels are written in terms of `s` itself; the ordered algorithms use
/// `full` as their amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherStrength {
    pub full: f32,
    pub half: f32,
}

impl DitherStrength {
    /// Scale a user-facing strength. Negative values are treated as 0.
    pub fn new(strength: f32) -> Self {
        let strength = strength.max(0.0);
        Self {
            full: 0.5 * strength,
            half: 0.25 * strength,
        }
    }

    /// The user-facing strength this was built from.
    #[inline]
    pub fn strength(self) -> f32 {
        self.full * 2.0
    }
}

impl Default for DitherStrength {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Accumulated quantization error for the current and next scanline.
///
/// Each entry holds red, green and blue error. Error is clamped to the
/// signed byte range as it is added. The rows grow to the widest image seen
/// and are reused across passes, so one workspace can serve many frames.
///
/// # Usage Pattern
///
/// 1. Call `begin(width)` at the start of a pass
/// 2. For each row:
///    a. Read accumulated error with `accumulated(x)`
///    b. Distribute error with `add_error(x, row_offset, error)`
///    c. After the row is complete, call `advance_row()`
#[derive(Debug, Clone, Default)]
pub struct ErrorRows {
    current: Vec<[f32; 3]>,
    next: Vec<[f32; 3]>,
    width: usize,
}

/// Error bounds, matching a signed byte.
const ERROR_MIN: f32 = -128.0;
const ERROR_MAX: f32 = 127.0;

impl ErrorRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace already sized for `width` pixels.
    pub fn with_width(width: usize) -> Self {
        let mut rows = Self::new();
        rows.begin(width);
        rows
    }

    /// Prepare for a pass over rows `width` pixels wide and clear both rows.
    pub fn begin(&mut self, width: usize) {
        if self.current.len() < width {
            self.current.resize(width, [0.0; 3]);
            self.next.resize(width, [0.0; 3]);
        }
        self.width = width;
        self.current[..width].fill([0.0; 3]);
        self.next[..width].fill([0.0; 3]);
    }

    /// Width of the current pass.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn accumulated(&self, x: usize) -> [f32; 3] {
        self.current[x]
    }

    /// Add error to a pixel of the current row (`row_offset` 0) or the next
    /// row (`row_offset` 1).
    ///
    /// Silently ignores coordinates outside the row or deeper offsets.
    #[inline]
    pub fn add_error(&mut self, x: isize, row_offset: usize, error: [f32; 3]) {
        if x < 0 || x as usize >= self.width {
            return;
        }
        let row = match row_offset {
            0 => &mut self.current,
            1 => &mut self.next,
            _ => return,
        };
        let cell = &mut row[x as usize];
        for c in 0..3 {
            cell[c] = (cell[c] + error[c]).clamp(ERROR_MIN, ERROR_MAX);
        }
    }

    /// Move to the next scanline: the next row becomes current and a cleared
    /// row takes its place.
    pub fn advance_row(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next[..self.width].fill([0.0; 3]);
    }
}

// ============================================================================
// Shared dithering infrastructure
// ============================================================================

/// Add accumulated error to a channel and clamp to 0..=255.
#[inline]
pub(crate) fn clamp_channel(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

/// Run `pass` with alpha blending disabled, restoring the previous mode
/// afterwards.
pub(crate) fn without_blending(image: &mut dyn Raster, pass: impl FnOnce(&mut dyn Raster)) {
    let previous = image.set_blending(false);
    pass(&mut *image);
    image.set_blending(previous);
}

/// Core error diffusion loop shared by all diffusing algorithms.
///
/// For each opaque pixel this adds the accumulated error to the quantized
/// color, looks up the nearest palette entry, writes it, and hands the
/// difference between the quantized color and the chosen entry to
/// `spread`. The accumulated error itself is not part of that difference.
/// A pixel whose source color is the chosen entry passes on zero error, so
/// images made of palette colors come through unchanged.
///
/// `spread` receives the workspace, the pixel's x coordinate, the quantized
/// input color and the per-channel difference.
pub(crate) fn diffuse_errors(
    image: &mut dyn Raster,
    table: &PaletteTable,
    rows: &mut ErrorRows,
    mut spread: impl FnMut(&mut ErrorRows, usize, Rgba, [f32; 3]),
) {
    let has_transparent = table.has_transparent();
    let (width, height) = (image.width(), image.height());
    rows.begin(width);

    without_blending(image, |image| {
        for y in 0..height {
            for x in 0..width {
                let color = image.pixel(x, y);
                if !color.is_opaque() && has_transparent {
                    image.set_pixel(x, y, Rgba::TRANSPARENT);
                    continue;
                }
                let source = color;
                let color = color.quantized();
                let err = rows.accumulated(x);
                let index = table.lookup(
                    clamp_channel(color.r() as f32 + err[0]),
                    clamp_channel(color.g() as f32 + err[1]),
                    clamp_channel(color.b() as f32 + err[2]),
                );
                let used = table.color_at(index);
                image.set_pixel(x, y, used);

                let diff = if source.same_rgb(used) {
                    [0.0; 3]
                } else {
                    [
                        color.r() as f32 - used.r() as f32,
                        color.g() as f32 - used.g() as f32,
                        color.b() as f32 - used.b() as f32,
                    ]
                };
                spread(rows, x, color, diff);
            }
            rows.advance_row();
        }
    });
}

/// Error diffusion with a fixed kernel.
///
/// Each neighbor receives `diff * s * weight / divisor`, where `s` is the
/// user-facing strength.
pub(crate) fn diffuse_with_kernel(
    image: &mut dyn Raster,
    table: &PaletteTable,
    rows: &mut ErrorRows,
    kernel: &Kernel,
    strength: DitherStrength,
) {
    let scale = strength.strength() / kernel.divisor as f32;
    diffuse_errors(image, table, rows, |rows, x, _, diff| {
        for &(dx, dy, weight) in kernel.entries {
            let factor = scale * weight as f32;
            rows.add_error(
                x as isize + dx as isize,
                dy as usize,
                [diff[0] * factor, diff[1] * factor, diff[2] * factor],
            );
        }
    });
}

/// Selector for the built-in algorithms.
///
/// Parses from and displays as kebab-case names, e.g. `floyd-steinberg`.
///
/// # Example
///
/// ```
/// use palette_reducer::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "burkes".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::Burkes);
/// assert_eq!(DitherAlgorithm::default().to_string(), "sierra-lite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Nearest color, no dithering.
    Solid,

    /// Sierra Lite error diffusion (3 neighbors).
    ///
    /// Cheap and fine-grained; the default.
    #[default]
    SierraLite,

    /// Floyd-Steinberg error diffusion (4 neighbors).
    FloydSteinberg,

    /// Burkes error diffusion (7 neighbors over 2 rows).
    ///
    /// Spreads error further than Floyd-Steinberg for smoother gradients.
    Burkes,

    /// Floyd-Steinberg with weights jittered by a rolling color hash.
    ///
    /// Breaks up the "worm" artifacts of fixed kernels.
    Noise,

    /// Ordered dithering with a coordinate-only offset.
    Roberts,

    /// Ordered dithering with a multiplicative, error-scaled adjustment.
    RobertsMul,

    /// Ordered dithering with an additive, error-scaled adjustment.
    RobertsEdit,

    /// Ordered dithering with an interleaved-gradient pattern.
    ShaderMimic,
}

impl DitherAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [DitherAlgorithm; 9] = [
        DitherAlgorithm::Solid,
        DitherAlgorithm::SierraLite,
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::Noise,
        DitherAlgorithm::Roberts,
        DitherAlgorithm::RobertsMul,
        DitherAlgorithm::RobertsEdit,
        DitherAlgorithm::ShaderMimic,
    ];

    /// The implementation behind this selector.
    pub fn ditherer(self) -> &'static dyn Dither {
        match self {
            DitherAlgorithm::Solid => &Solid,
            DitherAlgorithm::SierraLite => &SierraLite,
            DitherAlgorithm::FloydSteinberg => &FloydSteinberg,
            DitherAlgorithm::Burkes => &Burkes,
            DitherAlgorithm::Noise => &NoiseDiffusion,
            DitherAlgorithm::Roberts => &Roberts,
            DitherAlgorithm::RobertsMul => &RobertsMul,
            DitherAlgorithm::RobertsEdit => &RobertsEdit,
            DitherAlgorithm::ShaderMimic => &ShaderMimic,
        }
    }

    /// True for the algorithms that carry error between pixels.
    pub fn diffuses_error(self) -> bool {
        matches!(
            self,
            DitherAlgorithm::SierraLite
                | DitherAlgorithm::FloydSteinberg
                | DitherAlgorithm::Burkes
                | DitherAlgorithm::Noise
        )
    }

    fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::Solid => "solid",
            DitherAlgorithm::SierraLite => "sierra-lite",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Burkes => "burkes",
            DitherAlgorithm::Noise => "noise",
            DitherAlgorithm::Roberts => "roberts",
            DitherAlgorithm::RobertsMul => "roberts-mul",
            DitherAlgorithm::RobertsEdit => "roberts-edit",
            DitherAlgorithm::ShaderMimic => "shader-mimic",
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dither algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for DitherAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DitherAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
