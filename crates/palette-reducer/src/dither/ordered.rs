//! Ordered dithering from coordinate hashes.
//!
//! These algorithms carry no error between pixels. Each pixel gets an
//! offset derived from its own coordinates, so the pattern is static and
//! repeatable, and regions of the same color always dither the same way.
//! That makes them the better fit for animation, where error diffusion
//! patterns shimmer from frame to frame.
//!
//! - [`Roberts`] adds a coordinate-only offset to every channel. It never
//!   looks at the undithered choice, so even exact palette colors can move
//!   to a neighbor.
//! - [`RobertsMul`], [`RobertsEdit`] and [`ShaderMimic`] first look up the
//!   undithered nearest color and scale their offset by how far it is from
//!   the input. A source pixel that already is that color is kept as is.

use crate::color::Rgba;
use crate::palette::PaletteTable;
use crate::raster::Raster;

use super::{without_blending, Dither, DitherStrength, ErrorRows};

/// 64-bit multipliers for the x and y coordinates.
const X_MUL: u64 = 0xC13F_A9A9_02A6_328F;
const Y_MUL: u64 = 0x91E1_0DA5_C79E_7B1D;

/// 32-bit multipliers used by [`RobertsEdit`].
const X_MUL_32: u32 = 0xC13F_A9A9;
const Y_MUL_32: u32 = 0x91E1_0DA5;

/// Visit every pixel, writing transparent pixels as slot 0 when the palette
/// has one and replacing the rest with `pick(x, y, source, quantized)`.
fn reduce_ordered(
    image: &mut dyn Raster,
    table: &PaletteTable,
    mut pick: impl FnMut(usize, usize, Rgba, Rgba) -> Rgba,
) {
    let has_transparent = table.has_transparent();
    without_blending(image, |image| {
        for y in 0..image.height() {
            for x in 0..image.width() {
                let color = image.pixel(x, y);
                if !color.is_opaque() && has_transparent {
                    image.set_pixel(x, y, Rgba::TRANSPARENT);
                } else {
                    image.set_pixel(x, y, pick(x, y, color, color.quantized()));
                }
            }
        }
    });
}

#[inline]
fn clamp_byte(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
fn nearest(table: &PaletteTable, r: u8, g: u8, b: u8) -> Rgba {
    table.color_at(table.lookup(r, g, b))
}

/// Ordered dithering with an offset that depends only on position.
///
/// The top 7 bits of a 64-bit multiplicative hash of `(x, y)` give an offset
/// of up to about ±16 at strength 1, added equally to all channels. The
/// offset ignores the input color, so palette colors closer than that to a
/// neighbor are not preserved.
pub struct Roberts;

impl Roberts {
    /// Channel offset for pixel `(x, y)`.
    pub fn offset(x: usize, y: usize, strength: DitherStrength) -> i32 {
        let hash = (x as u64)
            .wrapping_mul(X_MUL)
            .wrapping_add((y as u64).wrapping_mul(Y_MUL)) as i64;
        let mut adj = ((hash >> 57) as f32 * strength.full) as i32;
        adj ^= adj >> 31;
        (adj as f32 - 32.0 * strength.full) as i32
    }
}

impl Dither for Roberts {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        _rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        reduce_ordered(image, table, |x, y, _, color| {
            let adj = Roberts::offset(x, y, strength);
            nearest(
                table,
                clamp_byte(color.r() as i32 + adj),
                clamp_byte(color.g() as i32 + adj),
                clamp_byte(color.b() as i32 + adj),
            )
        });
    }
}

/// Ordered dithering that scales each channel by a position-dependent
/// factor proportional to its distance from the undithered choice.
pub struct RobertsMul;

/// 2.3125 * 2^-27
const MUL_SCALE: f32 = 2.3125 / 134_217_728.0;

impl Dither for RobertsMul {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        _rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        let scale = strength.full * MUL_SCALE;
        reduce_ordered(image, table, |x, y, source, color| {
            let used = nearest(table, color.r(), color.g(), color.b());
            if source.same_rgb(used) {
                return used;
            }
            let mut pos = (x as u64)
                .wrapping_mul(X_MUL)
                .wrapping_sub((y as u64).wrapping_mul(Y_MUL));
            pos ^= pos >> 1;
            let adj = ((pos as i64) >> 40) as f32 * scale;

            let channel = |raw: u8, used: u8| {
                let raw = raw as i32;
                let spread = (used as i32 - raw) >> 3;
                clamp_byte((raw as f32 * (1.0 + adj * spread as f32)) as i32)
            };
            nearest(
                table,
                channel(color.r(), used.r()),
                channel(color.g(), used.g()),
                channel(color.b(), used.b()),
            )
        });
    }
}

/// Ordered dithering with an additive offset from a 32-bit coordinate hash,
/// scaled by the distance from the undithered choice.
pub struct RobertsEdit;

/// -3.9375 * 2^-20
const EDIT_SCALE: f32 = -3.9375 / 1_048_576.0;

impl RobertsEdit {
    /// Hash of pixel `(x, y)`.
    fn hash(x: usize, y: usize) -> i32 {
        let (x, y) = (x as u32, y as u32);
        let pos = x
            .wrapping_mul(X_MUL_32.wrapping_add(y))
            .wrapping_add(y.wrapping_mul(Y_MUL_32.wrapping_add(x)));
        pos.wrapping_add((pos >> 1) ^ (pos >> 3) ^ (pos >> 4)) as i32
    }
}

impl Dither for RobertsEdit {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        _rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        let scale = EDIT_SCALE * strength.full;
        reduce_ordered(image, table, |x, y, source, color| {
            let used = nearest(table, color.r(), color.g(), color.b());
            if source.same_rgb(used) {
                return used;
            }
            let adj = (RobertsEdit::hash(x, y) >> 12) as f32 * scale;

            let channel = |raw: u8, used: u8| {
                let raw = raw as i32;
                clamp_byte((raw as f32 + adj * (used as i32 - raw) as f32) as i32)
            };
            nearest(
                table,
                channel(color.r(), used.r()),
                channel(color.g(), used.g()),
                channel(color.b(), used.b()),
            )
        });
    }
}

/// Ordered dithering with an interleaved gradient noise pattern, the kind
/// usually computed in a fragment shader.
///
/// The offset amplitude grows with the luma of the input color.
pub struct ShaderMimic;

/// 1.25 * 2^-10
const SHADER_SCALE: f32 = 1.25 / 1024.0;

impl ShaderMimic {
    /// `fract(52.9829189 * fract(0.06711056 * x + 0.00583715 * y))`
    pub fn pattern(x: usize, y: usize) -> f32 {
        let mut pos = x as f32 * 0.067_110_56 + y as f32 * 0.005_837_15;
        pos -= pos.trunc();
        pos *= 52.982_918_9;
        pos - pos.trunc()
    }
}

impl Dither for ShaderMimic {
    fn reduce(
        &self,
        image: &mut dyn Raster,
        table: &PaletteTable,
        _rows: &mut ErrorRows,
        strength: DitherStrength,
    ) {
        let scale = SHADER_SCALE * strength.full;
        reduce_ordered(image, table, |x, y, source, color| {
            let used = nearest(table, color.r(), color.g(), color.b());
            if source.same_rgb(used) {
                return used;
            }
            let (r, g, b) = (color.r() as i32, color.g() as i32, color.b() as i32);
            let len = (r * 5 + g * 9 + b * 2) as f32 * scale + 1.0;
            let adj = ShaderMimic::pattern(x, y) * len - len * 0.5;

            let channel = |raw: i32, used: u8| {
                clamp_byte((raw as f32 + adj * (raw - used as i32) as f32) as i32)
            };
            nearest(
                table,
                channel(r, used.r()),
                channel(g, used.g()),
                channel(b, used.b()),
            )
        });
    }
}
