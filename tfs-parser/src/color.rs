//! Color literal parsing and perceptual color math.
//!
//! Accepted literal forms are `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and
//! `rgb(r, g, b)` / `rgba(r, g, b, a)`. Anything else is simply not a color
//! — unparsable values degrade to "no highlight", they never error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RGB_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^rgba?\s*\(\s*([0-9.]+)\s*,\s*([0-9.]+)\s*,\s*([0-9.]+)(?:\s*,\s*([0-9.]+))?\s*\)$",
    )
    .expect("rgb call pattern compiles")
});

/// Normalized RGBA color, every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse a textual color literal, tolerating surrounding whitespace.
    ///
    /// `rgb()` channels are clamped to `[0, 255]`, alpha to `[0, 1]`
    /// (default 1). Hex digits are case-insensitive; `#RGB` doubles each
    /// digit. Returns `None` for every other textual form.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(digits) = raw.strip_prefix('#') {
            return Self::parse_hex(digits);
        }
        if let Some(caps) = RGB_CALL.captures(raw) {
            let channel = |idx: usize| -> Option<f64> {
                let value: f64 = caps.get(idx)?.as_str().parse().ok()?;
                Some(value.clamp(0.0, 255.0) / 255.0)
            };
            let red = channel(1)?;
            let green = channel(2)?;
            let blue = channel(3)?;
            let alpha = match caps.get(4) {
                Some(m) => m.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0),
                None => 1.0,
            };
            return Some(Self::new(red, green, blue, alpha));
        }
        None
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |s: &str| {
            u8::from_str_radix(s, 16)
                .ok()
                .map(|value| value as f64 / 255.0)
        };
        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, digit) in channels.iter_mut().zip(digits.chars()) {
                    *slot = pair(&format!("{digit}{digit}"))?;
                }
                Some(Self::new(channels[0], channels[1], channels[2], 1.0))
            }
            6 => Some(Self::new(
                pair(&digits[0..2])?,
                pair(&digits[2..4])?,
                pair(&digits[4..6])?,
                1.0,
            )),
            8 => Some(Self::new(
                pair(&digits[0..2])?,
                pair(&digits[2..4])?,
                pair(&digits[4..6])?,
                pair(&digits[6..8])?,
            )),
            _ => None,
        }
    }

    /// WCAG relative luminance: sRGB-linearize each channel, then the
    /// `0.2126 R + 0.7152 G + 0.0722 B` weighted sum. Pure white is 1.0,
    /// pure black 0.0.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(v: f64) -> f64 {
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.red) + 0.7152 * linear(self.green) + 0.0722 * linear(self.blue)
    }

    /// Move each color channel linearly toward 1 by `factor`; alpha is
    /// untouched. `factor` 0 is the identity, 1 is pure white.
    pub fn blend_toward_white(&self, factor: f64) -> Self {
        Self {
            red: self.red + (1.0 - self.red) * factor,
            green: self.green + (1.0 - self.green) * factor,
            blue: self.blue + (1.0 - self.blue) * factor,
            alpha: self.alpha,
        }
    }

    /// Canonical lowercase hex: `#rrggbb` when opaque (alpha within float
    /// tolerance of 1), `#rrggbbaa` otherwise. Channels are rounded to the
    /// nearest byte and clamped.
    pub fn to_canonical_hex(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 0.999 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", byte(self.alpha))
        }
    }

    /// 6-digit hex presentation with alpha discarded.
    pub fn to_hex6(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    /// `rgba(R, G, B, A)` presentation with alpha rounded to two decimal
    /// places and printed without trailing zeros.
    pub fn to_rgba_string(&self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let alpha = (self.alpha * 100.0).round() / 100.0;
        format!(
            "rgba({}, {}, {}, {})",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#abc", (0xaa, 0xbb, 0xcc, 255))]
    #[case("#1a2b3c", (0x1a, 0x2b, 0x3c, 255))]
    #[case("#1A2B3C", (0x1a, 0x2b, 0x3c, 255))]
    #[case("#11223380", (0x11, 0x22, 0x33, 0x80))]
    fn parses_hex_forms(#[case] raw: &str, #[case] expected: (u8, u8, u8, u8)) {
        let color = Rgba::parse(raw).expect("hex literal parses");
        let byte = |v: f64| (v * 255.0).round() as u8;
        assert_eq!(
            (
                byte(color.red),
                byte(color.green),
                byte(color.blue),
                byte(color.alpha)
            ),
            expected
        );
    }

    #[rstest]
    #[case("rgb(255, 0, 0)", Rgba::new(1.0, 0.0, 0.0, 1.0))]
    #[case("rgb( 255 , 0 , 0 )", Rgba::new(1.0, 0.0, 0.0, 1.0))]
    #[case("RGBA(0, 0, 0, 0.5)", Rgba::new(0.0, 0.0, 0.0, 0.5))]
    #[case("rgba(300, 5, 0, 2)", Rgba::new(1.0, 5.0 / 255.0, 0.0, 1.0))]
    fn parses_rgb_calls(#[case] raw: &str, #[case] expected: Rgba) {
        assert_eq!(Rgba::parse(raw), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("red")]
    #[case("#ab")]
    #[case("#abcd")]
    #[case("#12345")]
    #[case("#1234567")]
    #[case("#xyzxyz")]
    #[case("rgb(1, 2)")]
    #[case("rgb(1, 2, 3, 4, 5)")]
    #[case("hsl(0, 0%, 0%)")]
    #[case("rgb(1.2.3, 0, 0)")]
    #[case("rgb(-1, 0, 0)")]
    fn rejects_non_colors(#[case] raw: &str) {
        assert_eq!(Rgba::parse(raw), None);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(Rgba::parse("  #ffffff  ").is_some());
        assert!(Rgba::parse(" rgba(1, 2, 3, 0.5) ").is_some());
    }

    #[test]
    fn luminance_of_white_and_black() {
        let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
        let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
        assert!((white.relative_luminance() - 1.0).abs() < 1e-6);
        assert!(black.relative_luminance().abs() < 1e-6);
    }

    #[test]
    fn blend_moves_channels_but_not_alpha() {
        let color = Rgba::new(0.0, 0.5, 1.0, 0.25);
        let blended = color.blend_toward_white(0.5);
        assert_eq!(blended.red, 0.5);
        assert_eq!(blended.green, 0.75);
        assert_eq!(blended.blue, 1.0);
        assert_eq!(blended.alpha, 0.25);
    }

    #[test]
    fn blend_extremes_are_identity_and_white() {
        let color = Rgba::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(color.blend_toward_white(0.0), color);
        let white = color.blend_toward_white(1.0);
        assert_eq!((white.red, white.green, white.blue), (1.0, 1.0, 1.0));
    }

    #[rstest]
    #[case("#abc", "#aabbcc")]
    #[case("#AABBCC", "#aabbcc")]
    #[case("#11223380", "#11223380")]
    #[case("rgb(255, 153, 0)", "#ff9900")]
    fn canonical_hex_round_trips(#[case] raw: &str, #[case] canonical: &str) {
        assert_eq!(Rgba::parse(raw).unwrap().to_canonical_hex(), canonical);
    }

    #[test]
    fn near_opaque_alpha_collapses_to_six_digits() {
        let color = Rgba::new(1.0, 1.0, 1.0, 0.9995);
        assert_eq!(color.to_canonical_hex(), "#ffffff");
        let translucent = Rgba::new(1.0, 1.0, 1.0, 254.0 / 255.0);
        assert_eq!(translucent.to_canonical_hex(), "#fffffffe");
    }

    #[test]
    fn presentations_discard_and_round_alpha() {
        let color = Rgba::parse("rgba(10, 20, 30, 0.3)").unwrap();
        assert_eq!(color.to_hex6(), "#0a141e");
        assert_eq!(color.to_rgba_string(), "rgba(10, 20, 30, 0.3)");
        let opaque = Rgba::parse("#ff8000").unwrap();
        assert_eq!(opaque.to_rgba_string(), "rgba(255, 128, 0, 1)");
    }
}
