//! # Color Module
//!
//! Everything that turns raw source text into comparable colors.
//!
//! ## Pipeline
//!
//! - `parser`: scans text for color literals (hex, `rgb()`/`rgba()`,
//!   `hsl()`/`hsla()`, named colors)
//! - `normalize`: maps any literal onto its [`CanonicalColor`]
//! - `category`: assigns a hue family to a canonical color
//! - `named`: the CSS named-color table
//!
//! ## Example
//!
//! ```rust
//! use color_analyzer_core::color::{categorize, normalize, scan, Category};
//!
//! let colors: Vec<_> = scan("a { color: #F00; border-color: red; }")
//!     .map(|(literal, _offset)| normalize(&literal))
//!     .collect();
//!
//! assert_eq!(colors[0], colors[1]);
//! assert_eq!(colors[0].to_string(), "#ff0000");
//! assert_eq!(categorize(colors[0]), Category::Red);
//! ```

mod category;
mod literal;
pub mod named;
mod normalize;
mod parser;

pub use category::{categorize, Category, Hsl};
pub use literal::{Channel, ColorFormat, ColorLiteral, ColorValue};
pub use normalize::{hsl_to_rgb, normalize, CanonicalColor};
pub use parser::{parse_literal, scan, Scanner};

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn max(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }
}
