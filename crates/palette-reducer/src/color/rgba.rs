//! Packed RGBA8888 color type
//!
//! Every pixel, palette entry and lookup key in this crate is an [`Rgba`]:
//! red in the top byte, alpha in the bottom byte. Transparency is coarse;
//! only bit 7 of the alpha byte is ever consulted.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black, the conventional content of palette slot 0.
    pub const TRANSPARENT: Rgba = Rgba(0);

    /// Create a color from its four channels.
    ///
    /// # Example
    /// ```
    /// use palette_reducer::Rgba;
    /// let red = Rgba::from_channels(255, 0, 0, 255);
    /// assert_eq!(red.0, 0xFF0000FF);
    /// ```
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Create an opaque color from red, green and blue.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// True when the high bit of alpha is set (alpha >= 128).
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.0 & 0x80 != 0
    }

    /// True when red, green and blue match, whatever the alpha.
    #[inline]
    pub const fn same_rgb(self, other: Rgba) -> bool {
        (self.0 ^ other.0) & 0xFFFF_FF00 == 0
    }

    /// Reduce each color channel to its top 5 bits, then refill the low 3
    /// bits from the top 3 so the result spans the full 0..=255 range.
    ///
    /// Alpha is forced to 0xFF for opaque input and cleared otherwise.
    /// Colors whose channels are already fixed points of this mapping
    /// (for example 0x00, 0x4A, 0x84, 0xFF) come back unchanged.
    ///
    /// # Example
    /// ```
    /// use palette_reducer::Rgba;
    /// assert_eq!(Rgba(0x808080FF).quantized(), Rgba(0x848484FF));
    /// assert_eq!(Rgba(0xFFFFFFFF).quantized(), Rgba(0xFFFFFFFF));
    /// ```
    #[inline]
    pub const fn quantized(self) -> Self {
        let c = self.0 & 0xF8F8_F880;
        if c & 0x80 == 0 {
            return Rgba(c & 0xFFFF_FF00);
        }
        Rgba(c | (c >> 5 & 0x0707_0700) | 0xFF)
    }

    /// The 15-bit lookup coordinate `r5 << 10 | g5 << 5 | b5`.
    #[inline]
    pub const fn table_index(self) -> usize {
        let c = self.0;
        ((c >> 17 & 0x7C00) | (c >> 14 & 0x3E0) | (c >> 11 & 0x1F)) as usize
    }

    /// Shift the color toward warm highlights and cool shadows while keeping
    /// its approximate luma. Alpha is preserved.
    pub fn hue_shift(self) -> Self {
        let r = self.r() as f32 / 255.0;
        let g = self.g() as f32 / 255.0;
        let b = self.b() as f32 / 255.0;
        let luma = (r * 0.375 + g * 0.5 + b * 0.125).powf(1.1875);
        let centered = luma - 0.5;
        let adj = (centered * centered.abs() * 13.5).sin() * 0.09;
        let warm = adj + r - b;
        let mild = 0.5 * (adj + g - b);
        Self::from_channels(
            unit_to_byte(luma + 0.625 * warm - mild),
            unit_to_byte(luma - 0.375 * warm + mild),
            unit_to_byte(luma - 0.375 * warm - mild),
            self.a(),
        )
    }
}

/// Lookup coordinate for raw channel values that are already in 0..=255.
#[inline]
pub const fn table_index_of(r: u8, g: u8, b: u8) -> usize {
    ((r as usize) << 7 & 0x7C00) | ((g as usize) << 2 & 0x3E0) | (b as usize) >> 3
}

#[inline]
fn unit_to_byte(v: f32) -> u8 {
    ((v * 256.0) as i32).clamp(0, 255) as u8
}

impl From<u32> for Rgba {
    #[inline]
    fn from(value: u32) -> Self {
        Rgba(value)
    }
}

impl From<Rgba> for u32 {
    #[inline]
    fn from(value: Rgba) -> Self {
        value.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 0xFF {
            write!(f, "#{:06X}", self.0 >> 8)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, each with or without the
    /// leading hash. Parsing is case-insensitive and trims whitespace.
    /// Colors without an alpha component are opaque.
    ///
    /// ```
    /// use palette_reducer::Rgba;
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgba(0xFF0000FF));
    ///
    /// let clear: Rgba = "00000000".parse().unwrap();
    /// assert!(!clear.is_opaque());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => Ok(Rgba(u32::from_str_radix(s, 16)? << 8 | 0xFF)),
            8 => Ok(Rgba(u32::from_str_radix(s, 16)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let c = Rgba(0x12345678);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.a(), 0x78);
        assert_eq!(Rgba::from_channels(0x12, 0x34, 0x56, 0x78), c);
    }

    #[test]
    fn test_opacity_uses_alpha_high_bit() {
        assert!(Rgba(0x000000FF).is_opaque());
        assert!(Rgba(0x00000080).is_opaque());
        assert!(!Rgba(0x0000007F).is_opaque());
        assert!(!Rgba::TRANSPARENT.is_opaque());
    }

    #[test]
    fn test_same_rgb_ignores_alpha() {
        assert!(Rgba(0x4A84B5FF).same_rgb(Rgba(0x4A84B580)));
        assert!(!Rgba(0x4A84B5FF).same_rgb(Rgba(0x4A84B4FF)));
        assert!(!Rgba(0x808080FF).same_rgb(Rgba(0x808080FF).quantized()));
    }

    #[test]
    fn test_quantized_refills_low_bits() {
        // 0x80 -> 0x80 | 0x04
        assert_eq!(Rgba(0x808080FF).quantized(), Rgba(0x848484FF));
        // low bits are discarded before refilling
        assert_eq!(Rgba(0x878787FF).quantized(), Rgba(0x848484FF));
        assert_eq!(Rgba(0x000000C0).quantized(), Rgba(0x000000FF));
        // transparent input keeps only the truncated color bits
        assert_eq!(Rgba(0xFFFFFF10).quantized(), Rgba(0xF8F8F800));
    }

    #[test]
    fn test_quantized_is_idempotent() {
        for v in 0..=255u8 {
            let once = Rgba::opaque(v, v, v).quantized();
            assert_eq!(once.quantized(), once, "channel value {v}");
        }
    }

    #[test]
    fn test_table_index_layout() {
        assert_eq!(Rgba(0x000000FF).table_index(), 0);
        assert_eq!(Rgba(0xFFFFFFFF).table_index(), 0x7FFF);
        assert_eq!(Rgba(0xFF0000FF).table_index(), 0x7C00);
        assert_eq!(Rgba(0x00FF00FF).table_index(), 0x03E0);
        assert_eq!(Rgba(0x0000FFFF).table_index(), 0x001F);
        for (r, g, b) in [(0u8, 0u8, 0u8), (17, 200, 93), (255, 128, 7)] {
            assert_eq!(
                Rgba::opaque(r, g, b).table_index(),
                table_index_of(r, g, b)
            );
        }
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("#FFFFFF".parse::<Rgba>(), Ok(Rgba(0xFFFFFFFF)));
        assert_eq!("ff8000".parse::<Rgba>(), Ok(Rgba(0xFF8000FF)));
        assert_eq!(" #0F0 ".parse::<Rgba>(), Ok(Rgba(0x00FF00FF)));
        assert_eq!("#11223344".parse::<Rgba>(), Ok(Rgba(0x11223344)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("#FFFF".parse::<Rgba>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Rgba>(), Err(ParseColorError::InvalidLength));
        assert!(matches!(
            "#GGGGGG".parse::<Rgba>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert_eq!("#ÄÄÄ".parse::<Rgba>(), Err(ParseColorError::InvalidLength));
    }

    #[test]
    fn test_display_round_trips() {
        for c in [Rgba(0xFF8000FF), Rgba(0x11223344), Rgba::TRANSPARENT] {
            let text = c.to_string();
            assert_eq!(text.parse::<Rgba>(), Ok(c), "via {text}");
        }
        assert_eq!(Rgba(0xFF8000FF).to_string(), "#FF8000");
    }

    #[test]
    fn test_hue_shift_keeps_alpha_and_extremes() {
        let black = Rgba(0x00000080).hue_shift();
        assert_eq!(black.a(), 0x80);
        assert_eq!((black.r(), black.g(), black.b()), (0, 0, 0));

        let white = Rgba(0xFFFFFFFF).hue_shift();
        assert_eq!(white.a(), 0xFF);
        assert!(white.r() > 240 && white.g() > 240 && white.b() > 240);
    }

    #[test]
    fn test_hue_shift_warms_highlights() {
        // A light gray picks up more red than blue after shifting
        let shifted = Rgba::opaque(200, 200, 200).hue_shift();
        assert!(shifted.r() > shifted.b(), "got {shifted}");
    }
}
