use serde::{Deserialize, Serialize};
use std::fmt;

use super::Encoding;

/// An RGB triple. Channels are meant to be 0-255 but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    pub fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[i32; 3]> for Rgb {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [i32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.channels()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An RGB triple plus a 0.0-1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i32, i32, i32, f64)", into = "(i32, i32, i32, f64)")]
pub struct Rgba {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: i32, g: i32, b: i32, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<(i32, i32, i32, f64)> for Rgba {
    fn from((r, g, b, a): (i32, i32, i32, f64)) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for (i32, i32, i32, f64) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A color in one of the three supported encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Hex(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl Color {
    pub fn encoding(&self) -> Encoding {
        match self {
            Color::Hex(_) => Encoding::Hex,
            Color::Rgb(_) => Encoding::Rgb,
            Color::Rgba(_) => Encoding::Rgba,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Color::Hex(hex) => Some(hex),
            _ => None,
        }
    }

    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            Color::Rgb(rgb) => Some(*rgb),
            _ => None,
        }
    }

    pub fn as_rgba(&self) -> Option<Rgba> {
        match self {
            Color::Rgba(rgba) => Some(*rgba),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => f.write_str(hex),
            Color::Rgb(rgb) => rgb.fmt(f),
            Color::Rgba(rgba) => rgba.fmt(f),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}
