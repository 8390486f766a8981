//! Opaque mark color.
//!
//! A [`Color`] is the CSS color string carried by a swatch. The engine never
//! interprets it beyond equality; surfaces that cannot hand the string to a
//! CSS engine use [`Color::to_rgba`] to resolve it.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color string, e.g. `"red"` or `"#ff8800"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// The color as given by the swatch.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to straight (non-premultiplied) RGBA.
    ///
    /// Understands `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and the basic CSS
    /// named colors. Returns `None` for anything else.
    #[must_use]
    pub fn to_rgba(&self) -> Option<[u8; 4]> {
        let s = self.0.trim();
        match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => named(&s.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    // `from_str_radix` alone would accept a leading sign.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| hex_digits(&hex[i..=i]).map(|v| v * 17);
    let byte = |i: usize| hex_digits(&hex[i..i + 2]);
    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        4 => Some([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

fn hex_digits(digits: &str) -> Option<u8> {
    match u8::from_str_radix(digits, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

fn named(name: &str) -> Option<[u8; 4]> {
    let rgb = match name {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "lime" => [0, 255, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "magenta" | "fuchsia" => [255, 0, 255],
        "cyan" | "aqua" => [0, 255, 255],
        "gray" | "grey" => [128, 128, 128],
        "brown" => [165, 42, 42],
        "pink" => [255, 192, 203],
        "transparent" => return Some([0, 0, 0, 0]),
        _ => return None,
    };
    let [r, g, b] = rgb;
    Some([r, g, b, 255])
}
