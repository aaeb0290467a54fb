use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use palette_reducer::{ErrorRows, PaletteAnalyzer, PaletteReducer, Raster, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::encoding::ApngEncoder;
use crate::error::{ConfigError, EncodeError, ImageError};
use crate::imaging;
use crate::models::ReduceConfig;

/// Error from the frame pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the pipeline's palette came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    /// The config's explicit color list
    Configured,
    /// The config's color list with a preloaded lookup table
    Preloaded,
    /// Analysis of a sample frame
    Analyzed,
    /// The built-in Aurora palette
    Default,
}

/// Reduces frames to one shared palette and writes the results.
pub struct FramePipeline {
    config: ReduceConfig,
    reducer: PaletteReducer,
    encoder: ApngEncoder,
    source: PaletteSource,
}

impl FramePipeline {
    /// Build the reducer described by `config`.
    ///
    /// An explicit palette wins; otherwise the palette is analyzed from
    /// `sample` when given, else the Aurora default is used.
    pub fn new(config: ReduceConfig, sample: Option<&dyn Raster>) -> Result<Self, ConfigError> {
        config.validate()?;
        let metric = config.color_metric()?;
        let mut reducer = PaletteReducer::new()
            .metric(metric)
            .algorithm(config.dither_algorithm()?)
            .dither_strength(config.dither_strength);

        let colors = config.palette_colors()?;
        let source = match (&config.preload, colors.is_empty(), sample) {
            (Some(_), true, _) => {
                return Err(ConfigError::Invalid(
                    "preload requires an explicit palette".to_string(),
                ));
            }
            (Some(path), false, _) => {
                let mapping = std::fs::read(path)?;
                reducer.exact_with_mapping(&colors, &mapping)?;
                PaletteSource::Preloaded
            }
            (None, false, _) => {
                reducer.exact(&colors);
                PaletteSource::Configured
            }
            (None, true, Some(sample)) => {
                let analyzer = PaletteAnalyzer::new()
                    .threshold(config.threshold)
                    .max_colors(config.max_colors)
                    .metric(metric);
                reducer.analyze_with(sample, &analyzer);
                PaletteSource::Analyzed
            }
            (None, true, None) => PaletteSource::Default,
        };

        if config.hue_shift {
            reducer.hue_shift();
        }

        tracing::info!(
            source = ?source,
            colors = reducer.table().len(),
            algorithm = %reducer.current_algorithm(),
            metric = %metric,
            "Palette ready"
        );

        let encoder = ApngEncoder::new()
            .flip_y(config.flip_y)
            .compression(config.compression);

        Ok(Self {
            config,
            reducer,
            encoder,
            source,
        })
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    pub fn reducer(&self) -> &PaletteReducer {
        &self.reducer
    }

    pub fn palette(&self) -> &[Rgba] {
        self.reducer.table().colors()
    }

    pub fn palette_source(&self) -> PaletteSource {
        self.source
    }

    /// Reduce one frame in place.
    pub fn reduce_frame(&mut self, frame: &mut RgbaImage) {
        self.reducer.reduce(frame);
        tracing::debug!(
            width = frame.width(),
            height = frame.height(),
            "Reduced frame"
        );
    }

    /// Reduce every frame in place.
    ///
    /// Frames are independent: each gets fresh error rows, so the result
    /// does not depend on frame order or on how rayon splits the work.
    pub fn reduce_all(&mut self, frames: &mut [RgbaImage]) {
        if frames.len() < 2 {
            for frame in frames.iter_mut() {
                self.reduce_frame(frame);
            }
            return;
        }

        let table = self.reducer.table();
        let strength = self.reducer.strength();
        let algorithm = self.reducer.current_algorithm();
        frames.par_iter_mut().for_each(|frame| {
            algorithm
                .ditherer()
                .reduce(frame, table, &mut ErrorRows::new(), strength);
        });
        tracing::debug!(frames = frames.len(), %algorithm, "Reduced frames");
    }

    /// Write `frames` as an APNG using the configured fps, row order and
    /// compression.
    pub fn write_animation(
        &mut self,
        path: &Path,
        frames: &[RgbaImage],
    ) -> Result<(), PipelineError> {
        let file = File::create(path)?;
        self.encoder
            .write(BufWriter::new(file), frames, self.config.fps)?;
        tracing::info!(
            path = %path.display(),
            frames = frames.len(),
            fps = self.config.fps,
            "Wrote animation"
        );
        Ok(())
    }

    /// Write one frame as a still PNG.
    pub fn write_still(&self, path: &Path, frame: &RgbaImage) -> Result<(), PipelineError> {
        imaging::save_png(path, frame)?;
        tracing::info!(path = %path.display(), "Wrote image");
        Ok(())
    }
}
