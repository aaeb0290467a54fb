//! PaletteReducer -- the primary ergonomic entry point for the crate.
//!
//! [`PaletteReducer`] bundles a [`PaletteTable`], an [`ErrorRows`]
//! workspace and the chosen algorithm and strength, so a caller can set a
//! palette once and reduce many images with it.

use rand::Rng;

use crate::analyze::PaletteAnalyzer;
use crate::color::Rgba;
use crate::dither::{DitherAlgorithm, DitherStrength, ErrorRows};
use crate::metric::ColorMetric;
use crate::palette::{preload, PaletteError, PaletteTable};
use crate::raster::Raster;

/// High-level palette reducer.
///
/// # Design
///
/// - Starts out with the default Aurora palette, so it is always usable
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - Palette changes (`exact`, `analyze`) rebuild the lookup table in place
/// - [`reduce()`](Self::reduce) takes `&mut self` because the error rows are
///   reused across images; use one reducer per thread
///
/// # Example
///
/// ```
/// use palette_reducer::{DitherAlgorithm, PaletteReducer, Raster, Rgba, RgbaImage};
///
/// let mut reducer = PaletteReducer::new()
///     .algorithm(DitherAlgorithm::FloydSteinberg)
///     .dither_strength(0.75);
/// reducer.exact(&[Rgba::TRANSPARENT, Rgba(0x000000FF), Rgba(0xFFFFFFFF)]);
///
/// let mut image = RgbaImage::from_fn(4, 4, |x, y| Rgba::opaque((x * 60) as u8, (y * 60) as u8, 90));
/// reducer.reduce(&mut image);
///
/// assert!(image.pixels().iter().all(|p| reducer.table().colors().contains(p)));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteReducer {
    table: PaletteTable,
    rows: ErrorRows,
    strength: DitherStrength,
    algorithm: DitherAlgorithm,
    metric: ColorMetric,
}

impl Default for PaletteReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteReducer {
    /// Create a reducer with the Aurora palette, Sierra Lite dithering and
    /// strength 1.
    pub fn new() -> Self {
        Self::with_table(PaletteTable::aurora())
    }

    /// Create a reducer around an already built table.
    pub fn with_table(table: PaletteTable) -> Self {
        Self {
            table,
            rows: ErrorRows::new(),
            strength: DitherStrength::default(),
            algorithm: DitherAlgorithm::default(),
            metric: ColorMetric::default(),
        }
    }

    /// Set the algorithm used by [`reduce()`](Self::reduce).
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the dither strength. 1 is the normal amount, 0 disables
    /// dithering; negative values count as 0.
    #[inline]
    pub fn dither_strength(mut self, strength: f32) -> Self {
        self.strength = DitherStrength::new(strength);
        self
    }

    /// Set the metric used by later `exact` and `analyze` calls.
    #[inline]
    pub fn metric(mut self, metric: ColorMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Use exactly `colors` as the palette.
    ///
    /// Slot 0 should be [`Rgba::TRANSPARENT`] if transparent pixels are to
    /// stay transparent. Fewer than 2 colors select the Aurora palette.
    pub fn exact(&mut self, colors: &[Rgba]) {
        self.table = PaletteTable::new(colors, self.metric);
    }

    /// Use `colors` as the palette together with a lookup table serialized
    /// by [`preload::encode_latin1`], skipping the nearest-color sweep.
    pub fn exact_preloaded(&mut self, colors: &[Rgba], preload: &str) -> Result<(), PaletteError> {
        let mapping = preload::decode_latin1(preload)?;
        self.exact_with_mapping(colors, &mapping[..])
    }

    /// Use `colors` as the palette together with raw lookup entries, one
    /// byte per quantized color, as stored in a preload file.
    pub fn exact_with_mapping(
        &mut self,
        colors: &[Rgba],
        mapping: &[u8],
    ) -> Result<(), PaletteError> {
        self.table = PaletteTable::with_preload(colors, mapping)?;
        Ok(())
    }

    /// Derive the palette from `image` with default analysis settings.
    pub fn analyze(&mut self, image: &dyn Raster) {
        self.analyze_with(image, &PaletteAnalyzer::new().metric(self.metric));
    }

    /// Derive the palette from `image` with explicit analysis settings.
    pub fn analyze_with(&mut self, image: &dyn Raster, analyzer: &PaletteAnalyzer) {
        self.table = analyzer.analyze(image);
    }

    /// Reduce `image` in place with the configured algorithm.
    pub fn reduce(&mut self, image: &mut dyn Raster) {
        self.reduce_with(image, self.algorithm);
    }

    /// Reduce `image` in place with a specific algorithm.
    pub fn reduce_with(&mut self, image: &mut dyn Raster, algorithm: DitherAlgorithm) {
        algorithm
            .ditherer()
            .reduce(image, &self.table, &mut self.rows, self.strength);
    }

    /// Nearest palette color for one color; see [`PaletteTable::reduce_single`].
    #[inline]
    pub fn reduce_single(&self, color: Rgba) -> Rgba {
        self.table.reduce_single(color)
    }

    /// Palette index for one color; see [`PaletteTable::reduce_index`].
    #[inline]
    pub fn reduce_index(&self, color: Rgba) -> u8 {
        self.table.reduce_index(color)
    }

    /// A random palette color, weighted by how much of the color cube it
    /// covers. Never the transparent slot.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        self.table.random_color(rng)
    }

    /// Shift the palette colors toward warm highlights and cool shadows.
    pub fn hue_shift(&mut self) {
        self.table.hue_shift();
    }

    /// The current palette and lookup table.
    #[inline]
    pub fn table(&self) -> &PaletteTable {
        &self.table
    }

    /// The configured algorithm.
    #[inline]
    pub fn current_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// The configured strength.
    #[inline]
    pub fn strength(&self) -> DitherStrength {
        self.strength
    }
}
