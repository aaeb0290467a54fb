use palette_reducer::{ColorMetric, DitherAlgorithm, Rgba};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Reduction settings loaded from a YAML file
///
/// Every field is optional in the file; missing fields take the same
/// values as [`ReduceConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Palette as hex colors. Empty means derive one from the first frame.
    #[serde(default)]
    pub palette: Vec<String>,

    /// Lookup table matching `palette`, one byte per entry, written by
    /// `northlight preload`
    #[serde(default)]
    pub preload: Option<PathBuf>,

    /// Color metric name (basic, lab, lab-rough, ycwcm)
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Dither algorithm name (solid, sierra-lite, floyd-steinberg, ...)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// 1.0 is the normal amount, 0 disables dithering
    #[serde(default = "default_dither_strength")]
    pub dither_strength: f32,

    /// Minimum distance between analyzed colors when over budget
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Upper bound on analyzed palette size
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Shift the palette toward warm highlights and cool shadows
    #[serde(default)]
    pub hue_shift: bool,

    /// Animation frame rate
    #[serde(default = "default_fps")]
    pub fps: u16,

    /// Write animation rows bottom-up
    #[serde(default)]
    pub flip_y: bool,

    /// zlib level 0-9 for animation output
    #[serde(default = "default_compression")]
    pub compression: u32,
}

fn default_metric() -> String {
    ColorMetric::default().to_string()
}

fn default_algorithm() -> String {
    DitherAlgorithm::default().to_string()
}

fn default_dither_strength() -> f32 {
    1.0
}

fn default_threshold() -> f64 {
    palette_reducer::analyze::DEFAULT_THRESHOLD
}

fn default_max_colors() -> usize {
    256
}

fn default_fps() -> u16 {
    30
}

fn default_compression() -> u32 {
    crate::encoding::DEFAULT_COMPRESSION
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            palette: Vec::new(),
            preload: None,
            metric: default_metric(),
            algorithm: default_algorithm(),
            dither_strength: default_dither_strength(),
            threshold: default_threshold(),
            max_colors: default_max_colors(),
            hue_shift: false,
            fps: default_fps(),
            flip_y: false,
            compression: default_compression(),
        }
    }
}

impl ReduceConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to read config");
            e
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            colors = config.palette.len(),
            algorithm = %config.algorithm,
            metric = %config.metric,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every named setting resolves
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.color_metric()?;
        self.dither_algorithm()?;
        self.palette_colors()?;
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".to_string()));
        }
        if self.compression > 9 {
            return Err(ConfigError::Invalid(format!(
                "compression must be 0-9, got {}",
                self.compression
            )));
        }
        if !self.dither_strength.is_finite() {
            return Err(ConfigError::Invalid(
                "dither_strength must be a finite number".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse the hex palette
    pub fn palette_colors(&self) -> Result<Vec<Rgba>, ConfigError> {
        self.palette
            .iter()
            .map(|value| {
                value.parse().map_err(|source| ConfigError::Color {
                    value: value.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn color_metric(&self) -> Result<ColorMetric, ConfigError> {
        self.metric
            .parse()
            .map_err(|e: palette_reducer::UnknownMetric| ConfigError::Invalid(e.to_string()))
    }

    pub fn dither_algorithm(&self) -> Result<DitherAlgorithm, ConfigError> {
        self.algorithm
            .parse()
            .map_err(|e: palette_reducer::UnknownAlgorithm| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReduceConfig::default();
        assert!(config.palette.is_empty());
        assert_eq!(config.metric, "basic");
        assert_eq!(config.algorithm, "sierra-lite");
        assert_eq!(config.dither_strength, 1.0);
        assert_eq!(config.threshold, 400.0);
        assert_eq!(config.max_colors, 256);
        assert_eq!(config.fps, 30);
        assert!(!config.flip_y);
        assert_eq!(config.compression, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_matches_default() {
        let config = ReduceConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ReduceConfig::default());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
palette:
  - "#00000000"
  - "#000"
  - "#FFFFFF"
  - "b54a00"
metric: lab
algorithm: roberts-mul
dither_strength: 0.5
fps: 12
flip_y: true
compression: 9
"##;

        let config = ReduceConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.palette_colors().unwrap(),
            vec![
                Rgba::TRANSPARENT,
                Rgba(0x000000FF),
                Rgba(0xFFFFFFFF),
                Rgba(0xB54A00FF)
            ]
        );
        assert_eq!(config.color_metric().unwrap(), ColorMetric::LabEuclidean);
        assert_eq!(config.dither_algorithm().unwrap(), DitherAlgorithm::RobertsMul);
        assert_eq!(config.dither_strength, 0.5);
        assert_eq!(config.fps, 12);
        assert!(config.flip_y);
        assert_eq!(config.compression, 9);
        // Untouched fields keep their defaults
        assert_eq!(config.max_colors, 256);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let err = ReduceConfig::from_yaml("palette: ['#12345']").unwrap_err();
        match err {
            ConfigError::Color { value, .. } => assert_eq!(value, "#12345"),
            other => panic!("Expected Color error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_algorithm_is_invalid() {
        let err = ReduceConfig::from_yaml("algorithm: bayer").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_metric_is_invalid() {
        let err = ReduceConfig::from_yaml("metric: cie2000").unwrap_err();
        assert!(err.to_string().contains("cie2000"));
    }

    #[test]
    fn test_zero_fps_is_invalid() {
        assert!(ReduceConfig::from_yaml("fps: 0").is_err());
    }

    #[test]
    fn test_compression_out_of_range() {
        assert!(ReduceConfig::from_yaml("compression: 10").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ReduceConfig::from_yaml("palette: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
