//! Burkes error diffusion.

use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{diffuse_with_kernel, Dither, DitherStrength, ErrorRows, BURKES};

/// Burkes error diffusion dithering.
///
/// Propagates error to 7 neighbors instead of Sierra Lite's 3, but still
/// only one row ahead, so the workspace stays at two rows.
///
/// ```text
///            X   4   2
///    1   2   4   2   1
/// ```
///
/// Total: 16/16 = 100% error propagation.
pub struct Burkes;

impl Dither for Burkes {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        diffuse_with_kernel(image, table, rows, &BURKES, strength);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::metric::ColorMetric;
    use crate::raster::RgbaImage;

    const BLACK: Rgba = Rgba(0x000000FF);
    const WHITE: Rgba = Rgba(0xFFFFFFFF);

    fn create_test_table() -> PaletteTable {
        PaletteTable::new(&[Rgba::TRANSPARENT, BLACK, WHITE], ColorMetric::default())
    }

    #[test]
    fn test_burkes_footprint() {
        let table = create_test_table();
        let mut image = RgbaImage::from_fn(5, 1, |x, _| {
            if x == 0 {
                Rgba(0x808080FF)
            } else {
                BLACK
            }
        });
        let mut rows = ErrorRows::new();
        Burkes.reduce(&mut image, &table, &mut rows, DitherStrength::default());

        assert_eq!(image.pixels(), &[WHITE, BLACK, BLACK, BLACK, BLACK]);
        assert_eq!(rows.accumulated(0), [-123.0 * 4.0 / 16.0; 3]);
        assert_eq!(rows.accumulated(1), [-123.0 * 2.0 / 16.0; 3]);
        assert_eq!(rows.accumulated(2), [-123.0 / 16.0; 3]);
        assert_eq!(rows.accumulated(3), [0.0; 3]);
    }

    #[test]
    fn test_burkes_half_strength() {
        let table = create_test_table();
        let mut image = RgbaImage::from_fn(3, 1, |x, _| {
            if x == 0 {
                Rgba(0x808080FF)
            } else {
                BLACK
            }
        });
        let mut rows = ErrorRows::new();
        Burkes.reduce(&mut image, &table, &mut rows, DitherStrength::new(0.5));
        assert_eq!(rows.accumulated(0), [-123.0 * 2.0 / 16.0; 3]);
    }

    #[test]
    fn test_burkes_valid_output() {
        let table = create_test_table();
        let mut image = RgbaImage::from_fn(8, 8, |x, y| Rgba::opaque((x * 32) as u8, (y * 32) as u8, 128));
        Burkes.reduce(
            &mut image,
            &table,
            &mut ErrorRows::new(),
            DitherStrength::default(),
        );
        assert!(image.pixels().iter().all(|&p| p == BLACK || p == WHITE));
    }
}
