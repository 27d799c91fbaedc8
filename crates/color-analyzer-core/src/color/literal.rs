//! Color literals as found in source text.

use std::fmt;

use serde::Serialize;

use super::Rgb;

/// Syntactic form a literal was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Named,
}

impl ColorFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Named => "named",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One red/green/blue argument of a functional RGB literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    /// Absolute value, 0-255
    Value(u8),
    /// Percentage, 0-100
    Percent(f64),
}

/// Parsed numeric content of a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// `#rgb` / `#rrggbb`, already expanded to six digits
    Hex(Rgb),
    /// `rgb()` / `rgba()`
    Rgb {
        channels: [Channel; 3],
        /// Alpha in 0.0-1.0 (`rgba` only)
        alpha: Option<f64>,
    },
    /// `hsl()` / `hsla()`
    Hsl {
        /// Degrees, already reduced to 0.0..360.0
        hue: f64,
        /// Percentage, 0-100
        saturation: f64,
        /// Percentage, 0-100
        lightness: f64,
        /// Alpha in 0.0-1.0 (`hsla` only)
        alpha: Option<f64>,
    },
    /// CSS keyword, resolved through the named-color table
    Named(Rgb),
}

/// A single color expression borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLiteral<'t> {
    /// The substring exactly as written
    pub raw: &'t str,
    pub format: ColorFormat,
    pub value: ColorValue,
}

#[cfg(test)]
impl ColorLiteral<'_> {
    /// Alpha channel, if the literal carried one.
    pub(crate) fn alpha(&self) -> Option<f64> {
        match self.value {
            ColorValue::Rgb { alpha, .. } | ColorValue::Hsl { alpha, .. } => alpha,
            ColorValue::Hex(_) | ColorValue::Named(_) => None,
        }
    }
}
