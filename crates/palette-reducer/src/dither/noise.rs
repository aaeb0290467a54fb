//! Floyd-Steinberg with per-pixel weight jitter.
//!
//! Fixed kernels lay error down in the same direction everywhere, which
//! shows up as "worm" artifacts in flat areas. Here two pseudo-random draws
//! per pixel shift weight between the right and below neighbors, and
//! between below-left and below-right.
//!
//! The draws come from a rolling 32-bit state that folds in each processed
//! color, not the pixel position, so the pattern depends on image content
//! but is fully deterministic for a given image.

use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{diffuse_errors, Dither, DitherStrength, ErrorRows};

/// Initial hash state for every pass.
const SEED: u32 = 0xFEED_BEEF;

/// Scale from the top 23 bits of the state to roughly -0.66..0.66.
const XI_SCALE: f32 = 1.3125 / 8_388_608.0;

/// Noise-modulated Floyd-Steinberg dithering.
///
/// ```text
///             X          7(1+xi1)
///    3(1+xi2) 5(1-xi1)   1(1-xi2)
/// ```
pub struct NoiseDiffusion;

impl Dither for NoiseDiffusion {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        let w1 = strength.strength() / 16.0;
        let (w3, w5, w7) = (w1 * 3.0, w1 * 5.0, w1 * 7.0);
        let mut state = SEED;

        diffuse_errors(image, table, rows, |rows, x, color, diff| {
            state = state.wrapping_add(color.0.wrapping_add(0x41C6_4E6D) ^ (color.0 >> 7));
            state = state.rotate_left(21);
            let xi1 = random_xi(state);
            state ^= state.rotate_left(5).wrapping_add(0x9E37_79B9);
            let xi2 = random_xi(state);

            let x = x as isize;
            let scaled = |factor: f32| [diff[0] * factor, diff[1] * factor, diff[2] * factor];
            rows.add_error(x + 1, 0, scaled(w7 * (1.0 + xi1)));
            rows.add_error(x - 1, 1, scaled(w3 * (1.0 + xi2)));
            rows.add_error(x + 1, 1, scaled(w1 * (1.0 - xi2)));
            rows.add_error(x, 1, scaled(w5 * (1.0 - xi1)));
        });
    }
}

/// Signed draw from the top 23 bits of `state`.
#[inline]
fn random_xi(state: u32) -> f32 {
    ((state as i32) >> 9) as f32 * XI_SCALE
}
