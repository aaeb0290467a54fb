//! Palette derivation from image content
//!
//! [`PaletteAnalyzer`] counts the quantized colors of an image and keeps the
//! most frequent ones. When the image has more colors than the budget, a
//! candidate is only accepted if it is at least `threshold` away from every
//! color accepted so far, which keeps noise-adjacent shades from crowding
//! out distinct ones.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::metric::ColorMetric;
use crate::palette::{PaletteTable, PALETTE_CAPACITY};
use crate::raster::Raster;

/// Default minimum weighted-Euclidean distance between accepted colors.
pub const DEFAULT_THRESHOLD: f64 = 400.0;

/// Frequency-based palette builder.
///
/// # Example
///
/// ```
/// use palette_reducer::{PaletteAnalyzer, Raster, Rgba, RgbaImage};
///
/// let image = RgbaImage::from_fn(4, 4, |x, _| {
///     if x < 2 { Rgba(0x000000FF) } else { Rgba(0xFFFFFFFF) }
/// });
/// let table = PaletteAnalyzer::new().analyze(&image);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.reduce_single(Rgba(0x101010FF)), Rgba(0x000000FF));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteAnalyzer {
    threshold: f64,
    max_colors: usize,
    metric: ColorMetric,
}

impl Default for PaletteAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_colors: PALETTE_CAPACITY,
            metric: ColorMetric::WeightedEuclidean,
        }
    }
}

impl PaletteAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum distance between accepted colors when over budget.
    #[inline]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the palette size limit, including a transparent slot.
    ///
    /// Clamped to 2..=256.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors.clamp(2, PALETTE_CAPACITY);
        self
    }

    /// Set the metric used to fill the rest of the lookup table.
    ///
    /// Acceptance thresholding always uses the weighted Euclidean metric,
    /// whose scale the threshold is expressed in.
    #[inline]
    pub fn metric(mut self, metric: ColorMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Choose the palette colors for `image`, most frequent first.
    ///
    /// Slot 0 is transparent black when the image has any transparent pixel,
    /// and always when the image has more colors than the budget.
    pub fn palette(&self, image: &dyn Raster) -> Vec<Rgba> {
        let mut counts: HashMap<Rgba, u32> = HashMap::new();
        let mut has_transparent = false;
        for y in 0..image.height() {
            for x in 0..image.width() {
                let color = image.pixel(x, y);
                if color.is_opaque() {
                    *counts.entry(color.quantized()).or_insert(0) += 1;
                } else {
                    has_transparent = true;
                }
            }
        }

        let mut ranked: Vec<(Rgba, u32)> = counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let limit = self.max_colors;
        let mut chosen = Vec::with_capacity(limit);
        if ranked.len() + has_transparent as usize <= limit {
            if has_transparent {
                chosen.push(Rgba::TRANSPARENT);
            }
            chosen.extend(ranked.iter().map(|&(color, _)| color));
        } else {
            chosen.push(Rgba::TRANSPARENT);
            for &(color, _) in &ranked {
                if chosen.len() >= limit {
                    break;
                }
                let crowded = chosen[1..].iter().any(|&accepted| {
                    ColorMetric::WeightedEuclidean.difference(color, accepted) < self.threshold
                });
                if !crowded {
                    chosen.push(color);
                }
            }
        }
        chosen
    }

    /// Derive a palette from `image` and build its lookup table.
    ///
    /// Unlike [`PaletteTable::new`], a one-color result is kept as-is rather
    /// than replaced by the default palette.
    pub fn analyze(&self, image: &dyn Raster) -> PaletteTable {
        let mut colors = self.palette(image);
        if colors.is_empty() {
            colors.push(Rgba::TRANSPARENT);
        }
        PaletteTable::build(&colors, self.metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbaImage;

    /// Channel values that survive quantization unchanged.
    const LEVELS: [u8; 4] = [0x00, 0x4A, 0xB5, 0xFF];

    fn stripes(colors: &[Rgba], counts: &[usize]) -> RgbaImage {
        let mut pixels = Vec::new();
        for (&color, &n) in colors.iter().zip(counts) {
            pixels.extend(std::iter::repeat(color).take(n));
        }
        let width = pixels.len();
        RgbaImage::from_fn(width, 1, |x, _| pixels[x])
    }

    #[test]
    fn test_under_budget_keeps_every_color() {
        let colors = [
            Rgba::opaque(LEVELS[1], LEVELS[2], LEVELS[3]),
            Rgba::opaque(LEVELS[0], LEVELS[0], LEVELS[0]),
            Rgba::opaque(LEVELS[3], LEVELS[1], LEVELS[0]),
        ];
        let image = stripes(&colors, &[5, 3, 1]);
        let table = PaletteAnalyzer::new().analyze(&image);
        // Sorted by frequency, no transparent slot
        assert_eq!(table.colors(), &colors[..]);
        for (i, &color) in colors.iter().enumerate() {
            assert_eq!(table.reduce_index(color) as usize, i);
        }
    }

    #[test]
    fn test_transparency_reserves_slot_zero() {
        let red = Rgba(0xFF0000FF);
        let image = stripes(&[red, Rgba(0x00000000)], &[3, 1]);
        let table = PaletteAnalyzer::new().analyze(&image);
        assert!(table.has_transparent());
        assert_eq!(table.colors(), &[Rgba::TRANSPARENT, red][..]);
    }

    #[test]
    fn test_counts_quantized_colors() {
        // Both collapse to 0x848484FF
        let image = stripes(&[Rgba(0x808080FF), Rgba(0x838383FF)], &[1, 1]);
        let palette = PaletteAnalyzer::new().palette(&image);
        assert_eq!(palette, vec![Rgba(0x848484FF)]);
    }

    #[test]
    fn test_equal_counts_sort_by_value() {
        let a = Rgba(0x0000FFFF);
        let b = Rgba(0xFF0000FF);
        let image = stripes(&[b, a], &[2, 2]);
        assert_eq!(PaletteAnalyzer::new().palette(&image), vec![a, b]);
    }

    #[test]
    fn test_over_budget_rejects_near_duplicates() {
        // A dominant olive, a blue-shifted twin that is too close, then
        // white and red; blue only makes it in if the limit allows
        let olive = Rgba::opaque(0x42, 0x42, 0x00);
        let twin = Rgba::opaque(0x42, 0x42, 0x08);
        let white = Rgba(0xFFFFFFFF);
        let red = Rgba(0xFF0000FF);
        let blue = Rgba(0x0000FFFF);
        let image = stripes(&[olive, twin, white, red, blue], &[10, 8, 4, 2, 1]);
        assert!(ColorMetric::WeightedEuclidean.difference(olive, twin) < DEFAULT_THRESHOLD);

        let palette = PaletteAnalyzer::new().max_colors(4).palette(&image);
        assert_eq!(palette, vec![Rgba::TRANSPARENT, olive, white, red]);
    }

    #[test]
    fn test_over_budget_stops_at_limit() {
        let colors: Vec<Rgba> = LEVELS
            .iter()
            .flat_map(|&r| LEVELS.iter().map(move |&g| Rgba::opaque(r, g, 0)))
            .collect();
        let counts: Vec<usize> = (0..colors.len()).map(|i| 20 - i).collect();
        let image = stripes(&colors, &counts);
        let table = PaletteAnalyzer::new().max_colors(5).threshold(0.0).analyze(&image);
        assert_eq!(table.len(), 5);
        assert_eq!(&table.colors()[1..], &colors[..4]);
    }

    #[test]
    fn test_fully_transparent_image() {
        let image = RgbaImage::new(3, 3);
        let table = PaletteAnalyzer::new().analyze(&image);
        assert_eq!(table.len(), 1);
        assert!(table.mapping().iter().all(|&i| i == 0));
    }

    #[test]
    fn test_max_colors_is_clamped() {
        let analyzer = PaletteAnalyzer::new().max_colors(1000);
        assert_eq!(analyzer.max_colors, PALETTE_CAPACITY);
        assert_eq!(PaletteAnalyzer::new().max_colors(0).max_colors, 2);
    }
}
