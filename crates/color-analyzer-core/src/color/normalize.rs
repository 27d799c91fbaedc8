//! Canonical identity for colors.
//!
//! Every literal collapses to a [`CanonicalColor`], a lowercase `#rrggbb`
//! string. Alpha never takes part in identity: `rgba(0,0,0,.5)` and `black`
//! are the same color.

use std::fmt;

use serde::{Serialize, Serializer};

use super::literal::{Channel, ColorLiteral, ColorValue};
use super::Rgb;

/// Identity key for "the same color". Displays as `#rrggbb`.
///
/// Ordering follows the displayed hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalColor(Rgb);

impl CanonicalColor {
    pub const fn new(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for CanonicalColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for CanonicalColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalize a parsed literal to its canonical color.
pub fn normalize(literal: &ColorLiteral<'_>) -> CanonicalColor {
    let rgb = match literal.value {
        ColorValue::Hex(rgb) | ColorValue::Named(rgb) => rgb,
        ColorValue::Rgb { channels, .. } => {
            let [r, g, b] = channels.map(channel_to_u8);
            Rgb::new(r, g, b)
        }
        ColorValue::Hsl {
            hue,
            saturation,
            lightness,
            ..
        } => hsl_to_rgb(hue, saturation, lightness),
    };
    CanonicalColor(rgb)
}

/// Convert HSL to RGB.
///
/// `hue` in degrees (any value, reduced modulo 360), `saturation` and
/// `lightness` as percentages 0-100.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0);
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = l - chroma / 2.0;
    Rgb::new(
        round_half_up((r1 + m) * 255.0),
        round_half_up((g1 + m) * 255.0),
        round_half_up((b1 + m) * 255.0),
    )
}

fn channel_to_u8(channel: Channel) -> u8 {
    match channel {
        Channel::Value(v) => v,
        Channel::Percent(p) => round_half_up(p / 100.0 * 255.0),
    }
}

fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_literal;

    fn canon(raw: &str) -> String {
        let literal = parse_literal(raw).unwrap_or_else(|| panic!("{raw} did not parse"));
        normalize(&literal).to_string()
    }

    #[test]
    fn test_equivalent_forms_share_identity() {
        assert_eq!(canon("#FF0000"), "#ff0000");
        assert_eq!(canon("rgb(255,0,0)"), "#ff0000");
        assert_eq!(canon("red"), "#ff0000");
        assert_eq!(canon("hsl(0, 100%, 50%)"), "#ff0000");
        assert_eq!(canon("rgb(100%, 0%, 0%)"), "#ff0000");
    }

    #[test]
    fn test_short_hex_matches_long_hex() {
        assert_eq!(canon("#F00"), canon("#FF0000"));
        assert_eq!(canon("#aBc"), "#aabbcc");
    }

    #[test]
    fn test_alpha_is_ignored() {
        assert_eq!(canon("rgba(0,0,0,.5)"), canon("black"));
        assert_eq!(canon("hsla(0, 100%, 50%, 0.1)"), canon("hsl(0, 100%, 50%)"));
        assert_eq!(canon("rgba(10, 64, 255, 0%)"), "#0a40ff");
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 50% of 255 is 127.5
        assert_eq!(canon("rgb(50%, 50%, 50%)"), "#808080");
        assert_eq!(canon("rgb(20%, 40%, 60%)"), "#336699");
    }

    #[test]
    fn test_hsl_sectors() {
        assert_eq!(canon("hsl(60, 100%, 50%)"), "#ffff00");
        assert_eq!(canon("hsl(120, 100%, 25%)"), "#008000");
        assert_eq!(canon("hsl(180, 100%, 50%)"), "#00ffff");
        assert_eq!(canon("hsl(240, 100%, 50%)"), "#0000ff");
        assert_eq!(canon("hsl(300, 100%, 50%)"), "#ff00ff");
        assert_eq!(canon("hsl(0, 0%, 100%)"), "#ffffff");
        assert_eq!(canon("hsl(0, 0%, 0%)"), "#000000");
    }

    #[test]
    fn test_hsl_hue_outside_range() {
        assert_eq!(canon("hsl(360, 100%, 50%)"), canon("hsl(0, 100%, 50%)"));
        assert_eq!(canon("hsl(-120, 100%, 50%)"), canon("hsl(240, 100%, 50%)"));
    }

    #[test]
    fn test_hsl_to_rgb_direct() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(720.0, 100.0, 50.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_ordering_matches_hex_string() {
        let a = CanonicalColor::new(Rgb::new(0x0a, 0xff, 0x00));
        let b = CanonicalColor::new(Rgb::new(0x0b, 0x00, 0x00));
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let color = CanonicalColor::new(Rgb::new(10, 64, 255));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#0a40ff\"");
    }
}
