//! Nearest-color mapping without dithering.

use crate::color::Rgba;
use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{without_blending, Dither, DitherStrength, ErrorRows};

/// Replace every pixel with its nearest palette color.
///
/// Produces flat blocks of color instead of dither patterns. Channels are
/// looked up as they are, without the quantize-and-refill step the other
/// algorithms apply, and the strength is ignored.
pub struct Solid;

impl Dither for Solid {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        _rows: &mut ErrorRows,
        _strength: DitherStrength,
    ) {
        let has_transparent = table.has_transparent();
        without_blending(image, |image| {
            for y in 0..image.height() {
                for x in 0..image.width() {
                    let color = image.pixel(x, y);
                    let reduced = if !color.is_opaque() && has_transparent {
                        Rgba::TRANSPARENT
                    } else {
                        table.color_at(table.lookup(color.r(), color.g(), color.b()))
                    };
                    image.set_pixel(x, y, reduced);
                }
            }
        });
    }
}
