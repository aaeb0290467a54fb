//! Perceptual color difference metrics
//!
//! Every metric returns a non-negative distance where larger means more
//! different. The scale is calibrated so that around 250 colors may look
//! different and at 500 they almost certainly do; palette analysis relies
//! on that scale for [`ColorMetric::WeightedEuclidean`].
//!
//! A transparent color is infinitely far from any opaque one, so the
//! lookup table never maps an opaque coordinate onto the transparent slot.

use std::fmt;
use std::str::FromStr;

use crate::color::{to_lab, to_lab_rough, ycwcm_chroma, ycwcm_luma, Lab, Rgba};

/// Color difference metric used to build lookup tables.
///
/// # Choosing a metric
///
/// - [`WeightedEuclidean`](Self::WeightedEuclidean): fast integer math in
///   gamma space. The default, and the one palette analysis thresholds on.
/// - [`LabEuclidean`](Self::LabEuclidean): weighted L*A*B* distance with the
///   full sRGB transfer curve. Slowest, most faithful to lightness.
/// - [`LabRough`](Self::LabRough): a cheaper L*A*B* approximation.
/// - [`YCwCm`](Self::YCwCm): table-driven cube-root luma plus two chroma axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMetric {
    /// Luma-weighted RGB distance with a red-mean cross term and a
    /// max-channel ("value") term.
    #[default]
    WeightedEuclidean,
    /// Squared L*A*B* difference weighted 190:25:10.
    LabEuclidean,
    /// Approximate L*A*B* difference weighted 350:25:10.
    LabRough,
    /// Squared YCwCm difference with cube-root luma.
    YCwCm,
}

impl ColorMetric {
    /// All metrics, in declaration order.
    pub const ALL: [ColorMetric; 4] = [
        ColorMetric::WeightedEuclidean,
        ColorMetric::LabEuclidean,
        ColorMetric::LabRough,
        ColorMetric::YCwCm,
    ];

    /// Distance between two packed colors.
    ///
    /// Returns `f64::INFINITY` when exactly one of them is transparent.
    pub fn difference(self, a: Rgba, b: Rgba) -> f64 {
        if a.is_opaque() != b.is_opaque() {
            return f64::INFINITY;
        }
        match self {
            ColorMetric::WeightedEuclidean => weighted_euclidean(
                a.r() as i32,
                a.g() as i32,
                a.b() as i32,
                b.r() as i32,
                b.g() as i32,
                b.b() as i32,
            ),
            _ => self.difference_channels(a.r(), a.g(), a.b(), b.r(), b.g(), b.b()),
        }
    }

    /// Distance between a packed color and raw channel values.
    ///
    /// Returns `f64::INFINITY` when `a` is transparent. This is the form
    /// the lookup-table sweep calls for every quantized coordinate.
    pub fn difference_rgb(self, a: Rgba, r: u8, g: u8, b: u8) -> f64 {
        if !a.is_opaque() {
            return f64::INFINITY;
        }
        match self {
            ColorMetric::WeightedEuclidean => weighted_euclidean(
                a.r() as i32,
                a.g() as i32,
                a.b() as i32,
                r as i32,
                g as i32,
                b as i32,
            ),
            _ => self.difference_channels(a.r(), a.g(), a.b(), r, g, b),
        }
    }

    /// Distance between two colors given as raw channels.
    ///
    /// The weighted Euclidean metric doubles the green difference in this
    /// form, so its values are not interchangeable with [`Self::difference`].
    /// The other metrics give the same result as the packed forms. Nothing
    /// in this crate calls it for the weighted Euclidean metric; it is kept
    /// for callers comparing raw channels directly.
    pub fn difference_channels(self, r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> f64 {
        match self {
            ColorMetric::WeightedEuclidean => {
                let (r1, g1, b1) = (r1 as i32, g1 as i32, b1 as i32);
                let (r2, g2, b2) = (r2 as i32, g2 as i32, b2 as i32);
                let rmean = r1 + r2;
                let r = r1 - r2;
                let g = (g1 - g2) << 1;
                let b = b1 - b2;
                let y = r1.max(g1).max(b1) - r2.max(g2).max(b2);
                (((1024 + rmean) * r * r >> 7) + g * g * 12 + ((1534 - rmean) * b * b >> 8) + y * y * 14)
                    as f64
            }
            ColorMetric::LabEuclidean => {
                lab_distance(to_lab(r1, g1, b1), to_lab(r2, g2, b2), 190.0)
            }
            ColorMetric::LabRough => {
                lab_distance(to_lab_rough(r1, g1, b1), to_lab_rough(r2, g2, b2), 350.0)
            }
            ColorMetric::YCwCm => {
                let y = ycwcm_luma(r1, g1, b1) - ycwcm_luma(r2, g2, b2);
                let cw = (ycwcm_chroma(r1, b1) - ycwcm_chroma(r2, b2)) * 1.5;
                let cm = ycwcm_chroma(g1, b1) - ycwcm_chroma(g2, b2);
                y * y + cw * cw + cm * cm
            }
        }
    }
}

#[inline]
fn weighted_euclidean(r1: i32, g1: i32, b1: i32, r2: i32, g2: i32, b2: i32) -> f64 {
    let rmean = r1 + r2;
    let r = r1 - r2;
    let g = g1 - g2;
    let b = b1 - b2;
    let y = r1.max(g1).max(b1) - r2.max(g2).max(b2);
    (((1024 + rmean) * r * r >> 7) + g * g * 12 + ((1534 - rmean) * b * b >> 8) + y * y * 14) as f64
}

#[inline]
fn lab_distance(a: Lab, b: Lab, l_weight: f64) -> f64 {
    let l = a.l - b.l;
    let aa = a.a - b.a;
    let bb = a.b - b.b;
    l * l * l_weight + aa * aa * 25.0 + bb * bb * 10.0
}

impl fmt::Display for ColorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMetric::WeightedEuclidean => "basic",
            ColorMetric::LabEuclidean => "lab",
            ColorMetric::LabRough => "lab-rough",
            ColorMetric::YCwCm => "ycwcm",
        };
        f.write_str(name)
    }
}

/// Error returned when a metric name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color metric '{}' (expected basic, lab, lab-rough or ycwcm)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for ColorMetric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "weighted-euclidean" => Ok(ColorMetric::WeightedEuclidean),
            "lab" | "lab-euclidean" => Ok(ColorMetric::LabEuclidean),
            "lab-rough" => Ok(ColorMetric::LabRough),
            "ycwcm" => Ok(ColorMetric::YCwCm),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgba; 6] = [
        Rgba(0x000000FF),
        Rgba(0xFFFFFFFF),
        Rgba(0xFF0000FF),
        Rgba(0x12345680),
        Rgba(0x7F7F7FFF),
        Rgba(0xC8641EFF),
    ];

    #[test]
    fn test_self_distance_is_zero() {
        for metric in ColorMetric::ALL {
            for c in SAMPLES {
                assert_eq!(metric.difference(c, c), 0.0, "{metric} on {c}");
                assert_eq!(metric.difference_rgb(c, c.r(), c.g(), c.b()), 0.0);
            }
        }
    }

    #[test]
    fn test_transparency_is_infinitely_far() {
        let clear = Rgba(0xFF000000);
        for metric in ColorMetric::ALL {
            for c in SAMPLES {
                assert_eq!(metric.difference(c, clear), f64::INFINITY);
                assert_eq!(metric.difference(clear, c), f64::INFINITY);
                assert_eq!(metric.difference_rgb(clear, c.r(), c.g(), c.b()), f64::INFINITY);
            }
        }
    }

    #[test]
    fn test_two_transparent_colors_are_compared_normally() {
        let metric = ColorMetric::WeightedEuclidean;
        assert_eq!(metric.difference(Rgba(0), Rgba(0)), 0.0);
        assert!(metric.difference(Rgba(0xFF000000), Rgba(0)).is_finite());
    }

    #[test]
    fn test_symmetry() {
        for metric in ColorMetric::ALL {
            for a in SAMPLES {
                for b in SAMPLES {
                    let ab = metric.difference(a, b);
                    let ba = metric.difference(b, a);
                    assert!((ab - ba).abs() < 1e-6, "{metric}: {a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_weighted_euclidean_known_values() {
        let metric = ColorMetric::WeightedEuclidean;
        // black vs white: r = g = b = y = -255, rmean = 255
        // (1279 * 65025 >> 7) + 65025 * 12 + (1279 * 65025 >> 8) + 65025 * 14
        let expected = (1279 * 65025 >> 7) + 65025 * 12 + (1279 * 65025 >> 8) + 65025 * 14;
        assert_eq!(
            metric.difference(Rgba(0x000000FF), Rgba(0xFFFFFFFF)),
            expected as f64
        );
        // A one-step green change lands well below the perceptible threshold
        assert!(metric.difference(Rgba(0x808080FF), Rgba(0x808180FF)) < 250.0);
    }

    #[test]
    fn test_channel_form_doubles_green() {
        let metric = ColorMetric::WeightedEuclidean;
        // Only green differs and the max channel stays put
        let packed = metric.difference(Rgba::opaque(20, 10, 20), Rgba::opaque(20, 12, 20));
        let channels = metric.difference_channels(20, 10, 20, 20, 12, 20);
        assert_eq!(packed, 48.0);
        assert_eq!(channels, 192.0);
    }

    #[test]
    fn test_channel_form_matches_packed_for_other_metrics() {
        for metric in [ColorMetric::LabEuclidean, ColorMetric::LabRough, ColorMetric::YCwCm] {
            for a in SAMPLES {
                for b in SAMPLES {
                    assert_eq!(
                        metric.difference_channels(a.r(), a.g(), a.b(), b.r(), b.g(), b.b()),
                        metric.difference(a, b),
                        "{metric}: {a} vs {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_metrics_agree_on_ordering_of_obvious_cases() {
        let gray = Rgba::opaque(128, 128, 128);
        let near = Rgba::opaque(136, 128, 128);
        let far = Rgba::opaque(255, 0, 0);
        for metric in ColorMetric::ALL {
            assert!(
                metric.difference(gray, near) < metric.difference(gray, far),
                "{metric}"
            );
        }
    }

    #[test]
    fn test_parse_and_display() {
        for metric in ColorMetric::ALL {
            assert_eq!(metric.to_string().parse::<ColorMetric>(), Ok(metric));
        }
        assert_eq!(" LAB ".parse::<ColorMetric>(), Ok(ColorMetric::LabEuclidean));
        let err = "cie2000".parse::<ColorMetric>().unwrap_err();
        assert!(err.to_string().contains("cie2000"));
    }
}
