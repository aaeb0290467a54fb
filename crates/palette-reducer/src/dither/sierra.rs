//! Sierra Lite error diffusion.

use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{diffuse_with_kernel, Dither, DitherStrength, ErrorRows, SIERRA_LITE};

/// Sierra Lite error diffusion dithering.
///
/// The cheapest error diffusion kernel, and the default algorithm. Half of
/// the error goes right, a quarter each below-left and below.
///
/// ```text
///    X   2
///    1   1
/// ```
///
/// With only three neighbors the pattern stays fine-grained, which suits
/// small pixel-art palettes.
pub struct SierraLite;

impl Dither for SierraLite {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        diffuse_with_kernel(image, table, rows, &SIERRA_LITE, strength);
    }
}
