//! CIE L*A*B* coordinates for 8-bit sRGB colors.

use super::lut::{srgb_to_linear, srgb_to_linear_rough};

/// L*A*B* coordinates with D65 normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787037037037037 * t + 0.13793103448275862
    }
}

/// Convert through linear RGB and CIE XYZ to L*A*B*.
pub fn to_lab(r: u8, g: u8, b: u8) -> Lab {
    let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

    let x = lab_f((r * 0.4124 + g * 0.3576 + b * 0.1805) / 0.950489);
    let y = lab_f(r * 0.2126 + g * 0.7152 + b * 0.0722);
    let z = lab_f((r * 0.0193 + g * 0.1192 + b * 0.9505) / 1.088840);

    Lab {
        l: 116.0 * y - 16.0,
        a: 500.0 * (x - y),
        b: 200.0 * (y - z),
    }
}

/// Cheaper approximation of [`to_lab`].
///
/// Uses the power curve without its linear toe, skips white-point
/// normalization, and replaces the cube root on X and Z with a square root.
/// Only differences between two results are meaningful.
pub fn to_lab_rough(r: u8, g: u8, b: u8) -> Lab {
    let (r, g, b) = (
        srgb_to_linear_rough(r),
        srgb_to_linear_rough(g),
        srgb_to_linear_rough(b),
    );

    let x = (r * 0.4124 + g * 0.3576 + b * 0.1805).sqrt();
    let y = (r * 0.2126 + g * 0.7152 + b * 0.0722).cbrt();
    let z = (r * 0.0193 + g * 0.1192 + b * 0.9505).sqrt();

    Lab {
        l: 100.0 * y,
        a: 500.0 * (x - y),
        b: 200.0 * (y - z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Srgb};

    #[test]
    fn test_lab_white_and_black() {
        let white = to_lab(255, 255, 255);
        assert!((white.l - 100.0).abs() < 0.01, "L = {}", white.l);
        assert!(white.a.abs() < 0.5 && white.b.abs() < 0.5);

        let black = to_lab(0, 0, 0);
        assert!(black.l.abs() < 1e-9);
    }

    /// Cross-check against an independent CIELAB implementation. The
    /// matrix here is rounded to four places, so allow a small tolerance.
    #[test]
    fn test_lab_matches_reference_crate() {
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (200, 120, 40),
            (12, 80, 160),
        ] {
            let ours = to_lab(r, g, b);
            let linear = Srgb::new(r, g, b).into_format::<f32>().into_linear();
            let theirs: palette::Lab = palette::Lab::from_color(linear);
            assert!(
                (ours.l - theirs.l as f64).abs() < 0.5,
                "L mismatch for ({r},{g},{b}): {} vs {}",
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a as f64).abs() < 1.5,
                "A mismatch for ({r},{g},{b}): {} vs {}",
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b as f64).abs() < 1.5,
                "B mismatch for ({r},{g},{b}): {} vs {}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_rough_lab_orders_lightness() {
        let dark = to_lab_rough(30, 30, 30);
        let mid = to_lab_rough(128, 128, 128);
        let light = to_lab_rough(230, 230, 230);
        assert!(dark.l < mid.l && mid.l < light.l);
    }
}
