//! Hue-family categorization.
//!
//! Lightness and saturation thresholds are evaluated exactly on the 8-bit
//! channels, so a color sitting on a threshold always lands in the same
//! bucket:
//!
//! | Test (in order)        | Category |
//! |------------------------|----------|
//! | lightness >= 90%       | white    |
//! | lightness <= 10%       | black    |
//! | saturation <= 10%      | gray     |
//!
//! Everything else is bucketed by hue, lower bound inclusive:
//!
//! | Hue (degrees)          | Category |
//! |------------------------|----------|
//! | [345, 360) and [0, 15) | red      |
//! | [15, 45)               | orange   |
//! | [45, 75)               | yellow   |
//! | [75, 165)              | green    |
//! | [165, 195)             | teal     |
//! | [195, 255)             | blue     |
//! | [255, 315)             | purple   |
//! | [315, 345)             | pink     |

use std::fmt;

use serde::Serialize;

use super::normalize::CanonicalColor;
use super::Rgb;

/// Hue family of a color.
///
/// Declaration order is the order categories appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
    Gray,
    Black,
    White,
}

impl Category {
    #[cfg(test)]
    pub(crate) const ALL: [Category; 11] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Teal,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Gray,
        Self::Black,
        Self::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Gray => "gray",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    fn from_hue(hue: f64) -> Self {
        match hue {
            h if h < 15.0 => Self::Red,
            h if h < 45.0 => Self::Orange,
            h if h < 75.0 => Self::Yellow,
            h if h < 165.0 => Self::Green,
            h if h < 195.0 => Self::Teal,
            h if h < 255.0 => Self::Blue,
            h if h < 315.0 => Self::Purple,
            h if h < 345.0 => Self::Pink,
            _ => Self::Red,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HSL coordinates: hue in degrees [0, 360), saturation and lightness in
/// percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let max = f64::from(rgb.max());
        let min = f64::from(rgb.min());
        let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
        let delta = max - min;

        let lightness = (max + min) / 510.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (255.0 - (max + min - 255.0).abs())
        };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            hue,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
        }
    }
}

/// Assign the hue family of a canonical color.
pub fn categorize(color: CanonicalColor) -> Category {
    let rgb = color.rgb();
    let max = u32::from(rgb.max());
    let min = u32::from(rgb.min());
    let sum = max + min;
    let delta = max - min;

    // lightness = sum / 510
    if sum * 10 >= 4590 {
        return Category::White;
    }
    if sum * 10 <= 510 {
        return Category::Black;
    }
    // saturation = delta / (255 - |sum - 255|)
    if delta * 10 <= 255 - sum.abs_diff(255) {
        return Category::Gray;
    }

    Category::from_hue(Hsl::from(rgb).hue)
}
