//! Palette lookup table
//!
//! A [`PaletteTable`] pairs up to 256 palette colors with a dense map from
//! every 15-bit quantized color (5 bits per channel) to the index of its
//! nearest palette entry. Building the map is the expensive step; once
//! built, reducing a pixel is a single array read.

use std::fmt;
use std::sync::OnceLock;

use rand::Rng;

use super::aurora::AURORA;
use super::error::PaletteError;
use crate::color::{table_index_of, Rgba};
use crate::metric::ColorMetric;

/// Number of quantized colors, one per 5-bit RGB coordinate.
pub const TABLE_SIZE: usize = 0x8000;

/// Maximum number of palette entries.
pub const PALETTE_CAPACITY: usize = 256;

/// Entries per red plane of the lookup table (32 greens x 32 blues).
const PLANE: usize = 1024;

/// Palette colors plus the nearest-color lookup table built from them.
///
/// Slot 0 conventionally holds [`Rgba::TRANSPARENT`]; when it does, the
/// ditherers write transparent pixels straight through as slot 0. Transparent
/// colors supplied in other slots are stored as `0` and never matched.
#[derive(Clone)]
pub struct PaletteTable {
    colors: [Rgba; PALETTE_CAPACITY],
    len: usize,
    mapping: Box<[u8; TABLE_SIZE]>,
}

impl PaletteTable {
    /// Build a table from `colors` using `metric`.
    ///
    /// At most 256 colors are used. Fewer than two colors cannot describe a
    /// useful palette, so the default Aurora table is returned instead.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_reducer::{ColorMetric, PaletteTable, Rgba};
    ///
    /// let colors = [Rgba::TRANSPARENT, Rgba(0x000000FF), Rgba(0xFFFFFFFF)];
    /// let table = PaletteTable::new(&colors, ColorMetric::default());
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.reduce_single(Rgba(0x202020FF)), Rgba(0x000000FF));
    /// assert_eq!(table.reduce_single(Rgba(0xE0E0E0FF)), Rgba(0xFFFFFFFF));
    /// ```
    pub fn new(colors: &[Rgba], metric: ColorMetric) -> Self {
        if colors.len() < 2 {
            return Self::aurora();
        }
        Self::build(colors, metric)
    }

    /// Build without the small-palette fallback.
    pub(crate) fn build(colors: &[Rgba], metric: ColorMetric) -> Self {
        let mut table = Self::empty();
        table.len = colors.len().min(PALETTE_CAPACITY);

        let mut hit = vec![false; TABLE_SIZE];
        for (i, &color) in colors[..table.len].iter().enumerate() {
            if color.is_opaque() {
                table.colors[i] = color;
                // Colors sharing a coordinate: the later slot takes it
                let coord = color.table_index();
                table.mapping[coord] = i as u8;
                hit[coord] = true;
            }
        }

        table.fill_unset(&hit, metric);
        table
    }

    /// Install `colors` together with a lookup table built earlier.
    ///
    /// Only the opaque colors are stored. `mapping` must have exactly one
    /// entry per quantized color; it is copied as-is with no recomputation.
    pub fn with_preload(colors: &[Rgba], mapping: &[u8]) -> Result<Self, PaletteError> {
        if mapping.len() != TABLE_SIZE {
            return Err(PaletteError::PreloadLength {
                expected: TABLE_SIZE,
                actual: mapping.len(),
            });
        }
        let mut table = Self::empty();
        table.len = colors.len().min(PALETTE_CAPACITY);
        for (i, &color) in colors[..table.len].iter().enumerate() {
            if color.is_opaque() {
                table.colors[i] = color;
            }
        }
        table.mapping.copy_from_slice(mapping);
        Ok(table)
    }

    /// The default 256-color Aurora table.
    ///
    /// The table is built once per process and cloned from then on.
    pub fn aurora() -> Self {
        static DEFAULT: OnceLock<PaletteTable> = OnceLock::new();
        DEFAULT
            .get_or_init(|| Self::build(&AURORA, ColorMetric::WeightedEuclidean))
            .clone()
    }

    fn empty() -> Self {
        Self {
            colors: [Rgba::TRANSPARENT; PALETTE_CAPACITY],
            len: 0,
            mapping: Box::new([0; TABLE_SIZE]),
        }
    }

    /// Assign every coordinate not exactly hit by a palette color to the
    /// nearest palette color under `metric`.
    fn fill_unset(&mut self, hit: &[bool], metric: ColorMetric) {
        let colors = &self.colors[..self.len];
        let fill_plane = |red: usize, plane: &mut [u8], hit: &[bool]| {
            let rr = expand5(red);
            for (gb, slot) in plane.iter_mut().enumerate() {
                if !hit[gb] {
                    *slot = nearest(colors, metric, rr, expand5(gb >> 5), expand5(gb & 31));
                }
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.mapping
                .par_chunks_mut(PLANE)
                .zip(hit.par_chunks(PLANE))
                .enumerate()
                .for_each(|(red, (plane, hit))| fill_plane(red, plane, hit));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (red, (plane, hit)) in self
                .mapping
                .chunks_mut(PLANE)
                .zip(hit.chunks(PLANE))
                .enumerate()
            {
                fill_plane(red, plane, hit);
            }
        }
    }

    /// Number of palette slots in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The palette colors, slot 0 first.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors[..self.len]
    }

    /// The raw lookup table, indexed by [`Rgba::table_index`].
    #[inline]
    pub fn mapping(&self) -> &[u8; TABLE_SIZE] {
        &self.mapping
    }

    /// True when slot 0 is transparent black and transparent pixels should
    /// be written as-is.
    #[inline]
    pub fn has_transparent(&self) -> bool {
        self.colors[0] == Rgba::TRANSPARENT
    }

    /// The color stored at `index`. Unused slots hold transparent black.
    #[inline]
    pub fn color_at(&self, index: u8) -> Rgba {
        self.colors[index as usize]
    }

    /// Palette index for raw channel values in 0..=255.
    #[inline]
    pub fn lookup(&self, r: u8, g: u8, b: u8) -> u8 {
        self.mapping[table_index_of(r, g, b)]
    }

    /// Palette index for a single color. Transparent input maps to slot 0.
    #[inline]
    pub fn reduce_index(&self, color: Rgba) -> u8 {
        if !color.is_opaque() {
            return 0;
        }
        self.mapping[color.table_index()]
    }

    /// Nearest palette color for a single color, or transparent black for
    /// transparent input.
    #[inline]
    pub fn reduce_single(&self, color: Rgba) -> Rgba {
        if !color.is_opaque() {
            return Rgba::TRANSPARENT;
        }
        self.color_at(self.mapping[color.table_index()])
    }

    /// Pick a palette index at random, weighted by how much of the color
    /// cube each entry owns.
    pub fn random_color_index<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.mapping[(rng.next_u32() >> 17) as usize]
    }

    /// Pick a palette color at random; see [`random_color_index`](Self::random_color_index).
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        self.color_at(self.random_color_index(rng))
    }

    /// Apply [`Rgba::hue_shift`] to every palette color.
    ///
    /// The lookup table is left alone, so pixels keep mapping to the same
    /// slots and come out in the shifted colors.
    pub fn hue_shift(&mut self) {
        for color in &mut self.colors[..self.len] {
            *color = color.hue_shift();
        }
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::aurora()
    }
}

impl fmt::Debug for PaletteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteTable")
            .field("len", &self.len)
            .field("colors", &self.colors())
            .finish_non_exhaustive()
    }
}

/// Widen a 5-bit channel to 8 bits by repeating its top bits.
#[inline]
fn expand5(v: usize) -> u8 {
    (v << 3 | v >> 2) as u8
}

/// Index of the first strictly smallest distance, or 0 when no color is
/// reachable (all transparent).
fn nearest(colors: &[Rgba], metric: ColorMetric, r: u8, g: u8, b: u8) -> u8 {
    let mut best = f64::INFINITY;
    let mut index = 0u8;
    for (i, &color) in colors.iter().enumerate() {
        let dist = metric.difference_rgb(color, r, g, b);
        if dist < best {
            best = dist;
            index = i as u8;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn create_test_palette() -> Vec<Rgba> {
        vec![
            Rgba::TRANSPARENT,
            Rgba(0x000000FF),
            Rgba(0xFFFFFFFF),
            Rgba(0xFF0000FF),
            Rgba(0x00FF00FF),
            Rgba(0x0000FFFF),
        ]
    }

    #[test]
    fn test_every_entry_is_valid() {
        for metric in ColorMetric::ALL {
            let table = PaletteTable::new(&create_test_palette(), metric);
            assert!(
                table.mapping().iter().all(|&i| (i as usize) < table.len()),
                "{metric} produced an out-of-range index"
            );
            // Transparent slot 0 is never a nearest-color answer
            assert!(table.mapping().iter().all(|&i| i != 0), "{metric}");
        }
    }

    #[test]
    fn test_exact_self_hit() {
        let palette = create_test_palette();
        for metric in ColorMetric::ALL {
            let table = PaletteTable::new(&palette, metric);
            for (i, &color) in palette.iter().enumerate().skip(1) {
                assert_eq!(table.reduce_index(color) as usize, i, "{metric} slot {i}");
                assert_eq!(table.reduce_single(color), color);
            }
        }
    }

    #[test]
    fn test_opaque_slot_zero_is_reachable() {
        let palette = [Rgba(0x000000FF), Rgba(0xFFFFFFFF)];
        let table = PaletteTable::new(&palette, ColorMetric::default());
        assert!(!table.has_transparent());
        assert_eq!(table.reduce_index(Rgba(0x000000FF)), 0);
        assert_eq!(table.reduce_index(Rgba(0x101010FF)), 0);
        assert_eq!(table.reduce_index(Rgba(0xF0F0F0FF)), 1);
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        // Two identical entries: the sweep keeps the first, while the exact
        // coordinate belongs to the last one written
        let palette = [Rgba::TRANSPARENT, Rgba(0x808080FF), Rgba(0x808080FF)];
        let table = PaletteTable::new(&palette, ColorMetric::default());
        let exact = Rgba(0x808080FF).table_index();
        assert_eq!(table.mapping()[exact], 2);
        assert!(table
            .mapping()
            .iter()
            .enumerate()
            .all(|(coord, &i)| coord == exact || i == 1));
    }

    #[test]
    fn test_shared_coordinate_goes_to_last_slot() {
        // Both quantize to the same 5-bit coordinate
        let palette = [Rgba::TRANSPARENT, Rgba(0x808080FF), Rgba(0x838383FF), Rgba(0xFFFFFFFF)];
        let table = PaletteTable::new(&palette, ColorMetric::default());
        assert_eq!(table.reduce_index(Rgba(0x808080FF)), 2);
        assert_eq!(table.reduce_single(Rgba(0x818181FF)), Rgba(0x838383FF));
    }

    #[test]
    fn test_transparent_entries_are_dropped() {
        let palette = [
            Rgba::TRANSPARENT,
            Rgba(0x000000FF),
            Rgba(0xFF000010),
            Rgba(0xFFFFFFFF),
        ];
        let table = PaletteTable::new(&palette, ColorMetric::default());
        assert_eq!(table.len(), 4);
        assert_eq!(table.color_at(2), Rgba::TRANSPARENT);
        assert!(table.mapping().iter().all(|&i| i != 2));
    }

    #[test]
    fn test_small_palettes_fall_back_to_aurora() {
        let empty = PaletteTable::new(&[], ColorMetric::default());
        let single = PaletteTable::new(&[Rgba(0xFF0000FF)], ColorMetric::LabEuclidean);
        assert_eq!(empty.len(), 256);
        assert_eq!(empty.colors(), &AURORA[..]);
        assert_eq!(single.colors(), empty.colors());
        assert_eq!(single.mapping()[..], empty.mapping()[..]);
        assert!(empty.has_transparent());
    }

    #[test]
    fn test_long_palettes_are_truncated() {
        let colors: Vec<Rgba> = (0..300u32).map(|i| Rgba(i << 8 | 0xFF)).collect();
        let table = PaletteTable::new(&colors, ColorMetric::default());
        assert_eq!(table.len(), PALETTE_CAPACITY);
    }

    #[test]
    fn test_transparent_input_reduces_to_slot_zero() {
        let table = PaletteTable::new(&create_test_palette(), ColorMetric::default());
        assert_eq!(table.reduce_index(Rgba(0xFFFFFF00)), 0);
        assert_eq!(table.reduce_single(Rgba(0xFFFFFF7F)), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_preload_matches_build() {
        let palette = create_test_palette();
        let built = PaletteTable::new(&palette, ColorMetric::YCwCm);
        let loaded = PaletteTable::with_preload(&palette, &built.mapping()[..]).unwrap();
        assert_eq!(loaded.colors(), built.colors());
        assert_eq!(loaded.mapping()[..], built.mapping()[..]);
    }

    #[test]
    fn test_preload_rejects_wrong_length() {
        let err = PaletteTable::with_preload(&create_test_palette(), &[0; 100]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::PreloadLength {
                expected: TABLE_SIZE,
                actual: 100
            }
        );
    }

    #[test]
    fn test_random_color_never_picks_transparent_slot() {
        let table = PaletteTable::new(&create_test_palette(), ColorMetric::default());
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let index = table.random_color_index(&mut rng);
            assert!(index != 0 && (index as usize) < table.len());
            assert!(table.random_color(&mut rng).is_opaque());
        }
    }

    #[test]
    fn test_hue_shift_keeps_mapping() {
        let mut table = PaletteTable::new(&create_test_palette(), ColorMetric::default());
        let before = table.mapping()[..].to_vec();
        let gray_before = table.color_at(2);
        table.hue_shift();
        assert_eq!(table.mapping()[..], before[..]);
        assert_eq!(table.color_at(0), Rgba::TRANSPARENT);
        assert!(table.color_at(2).is_opaque());
        assert_eq!(table.color_at(2).a(), gray_before.a());
    }

    #[test]
    fn test_expand5_covers_full_range() {
        assert_eq!(expand5(0), 0);
        assert_eq!(expand5(31), 255);
        assert_eq!(expand5(16), 0x84);
    }
}
