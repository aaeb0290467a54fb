//! Floyd-Steinberg error diffusion.

use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{diffuse_with_kernel, Dither, DitherStrength, ErrorRows, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic algorithm: all of the quantization error (at strength 1) is
/// distributed to 4 neighbors.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Total: 16/16 = 100% error propagation.
///
/// # Example
///
/// ```
/// use palette_reducer::{
///     ColorMetric, Dither, DitherStrength, ErrorRows, FloydSteinberg, PaletteTable, Rgba,
///     RgbaImage,
/// };
///
/// let table = PaletteTable::new(&[Rgba(0x000000FF), Rgba(0xFFFFFFFF)], ColorMetric::default());
/// let mut image = RgbaImage::from_fn(4, 4, |x, _| Rgba::opaque(x as u8 * 80, 0, 0));
/// FloydSteinberg.reduce(&mut image, &table, &mut ErrorRows::new(), DitherStrength::default());
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        diffuse_with_kernel(image, table, rows, &FLOYD_STEINBERG, strength);
    }
}
