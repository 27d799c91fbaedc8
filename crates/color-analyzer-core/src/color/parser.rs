//! Color literal scanner.
//!
//! Text is split left to right into non-overlapping candidate tokens, tried
//! in this order at every position:
//!
//! 1. `#` followed by word characters (hex candidate)
//! 2. `rgb(`, `rgba(`, `hsl(`, `hsla(` up to the closing `)`, no nesting
//! 3. an identifier: word characters and `-`
//!
//! Each candidate is then validated by [`parse_literal`]. Because identifiers
//! are consumed whole, a color name or function name is only recognised when
//! it is not part of a longer identifier (`credit`, `--brand-red`, `xrgb(`).
//!
//! A rejected function candidate only consumes its name. Scanning resumes at
//! the `(`, so literals inside an unclosed call (`'rgb(' + r + ', #fff'`) are
//! still found.

use once_cell::sync::Lazy;
use regex::Regex;

use super::literal::{Channel, ColorFormat, ColorLiteral, ColorValue};
use super::{named, Rgb};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)#\w*|(?:rgba?|hsla?)\([^()]*\)|[\w-]+").expect("valid regex")
});

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)$").expect("valid regex"));

/// Lazy, restartable sequence of `(literal, byte offset)` pairs.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Scanner<'t> {
    type Item = (ColorLiteral<'t>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(m) = TOKEN_RE.find_at(self.text, self.pos) {
            let candidate = m.as_str();
            if let Some(literal) = parse_literal(candidate) {
                self.pos = m.end();
                return Some((literal, m.start()));
            }
            self.pos = match candidate.find('(') {
                Some(open) => m.start() + open,
                None => m.end(),
            };
        }
        self.pos = self.text.len();
        None
    }
}

/// Scan `text` for color literals.
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner { text, pos: 0 }
}

/// Parse a complete color literal.
///
/// Returns `None` when `raw` is not exactly one well-formed literal.
pub fn parse_literal(raw: &str) -> Option<ColorLiteral<'_>> {
    let (format, value) = if let Some(digits) = raw.strip_prefix('#') {
        (ColorFormat::Hex, ColorValue::Hex(parse_hex(digits)?))
    } else if let Some(open) = raw.find('(') {
        let args = raw[open + 1..].strip_suffix(')')?;
        match raw[..open].to_ascii_lowercase().as_str() {
            "rgb" => (ColorFormat::Rgb, parse_rgb(args, false)?),
            "rgba" => (ColorFormat::Rgba, parse_rgb(args, true)?),
            "hsl" => (ColorFormat::Hsl, parse_hsl(args, false)?),
            "hsla" => (ColorFormat::Hsla, parse_hsl(args, true)?),
            _ => return None,
        }
    } else {
        (ColorFormat::Named, ColorValue::Named(named::lookup(raw)?))
    };

    Some(ColorLiteral { raw, format, value })
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 => {
            let expand = |i: usize| byte(&digits[i..=i].repeat(2));
            Some(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Rgb::new(
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
        )),
        _ => None,
    }
}

fn split_args(args: &str, expected: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    (parts.len() == expected).then_some(parts)
}

fn parse_number(s: &str) -> Option<f64> {
    if !NUMBER_RE.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_percent(s: &str) -> Option<f64> {
    let value = parse_number(s.strip_suffix('%')?)?;
    (0.0..=100.0).contains(&value).then_some(value)
}

fn parse_channel(s: &str) -> Option<Channel> {
    if s.ends_with('%') {
        return parse_percent(s).map(Channel::Percent);
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = s.parse().ok()?;
    u8::try_from(value).ok().map(Channel::Value)
}

fn parse_alpha(s: &str) -> Option<f64> {
    if s.ends_with('%') {
        return parse_percent(s).map(|p| p / 100.0);
    }
    let value = parse_number(s)?;
    (0.0..=1.0).contains(&value).then_some(value)
}

fn parse_hue(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    let number = lower.strip_suffix("deg").unwrap_or(lower.as_str());
    parse_number(number).map(|h| h.rem_euclid(360.0))
}

fn parse_rgb(args: &str, with_alpha: bool) -> Option<ColorValue> {
    let parts = split_args(args, if with_alpha { 4 } else { 3 })?;
    let channels = [
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ];
    let alpha = if with_alpha {
        Some(parse_alpha(parts[3])?)
    } else {
        None
    };
    Some(ColorValue::Rgb { channels, alpha })
}

fn parse_hsl(args: &str, with_alpha: bool) -> Option<ColorValue> {
    let parts = split_args(args, if with_alpha { 4 } else { 3 })?;
    let hue = parse_hue(parts[0])?;
    let saturation = parse_percent(parts[1])?;
    let lightness = parse_percent(parts[2])?;
    let alpha = if with_alpha {
        Some(parse_alpha(parts[3])?)
    } else {
        None
    };
    Some(ColorValue::Hsl {
        hue,
        saturation,
        lightness,
        alpha,
    })
}
