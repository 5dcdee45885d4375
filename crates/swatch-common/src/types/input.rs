use std::borrow::Cow;
use std::fmt;

use super::{Color, Rgb, Rgba};

/// A raw color value as handed to the detector: either text or a number list.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput<'a> {
    Text(&'a str),
    Sequence(Cow<'a, [f64]>),
}

impl fmt::Display for ColorInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorInput::Text(s) => f.write_str(s),
            ColorInput::Sequence(values) => write!(f, "{values:?}"),
        }
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        ColorInput::Text(s)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(s: &'a String) -> Self {
        ColorInput::Text(s.as_str())
    }
}

impl<'a> From<&'a [f64]> for ColorInput<'a> {
    fn from(values: &'a [f64]) -> Self {
        ColorInput::Sequence(Cow::Borrowed(values))
    }
}

impl<'a> From<&'a Vec<f64>> for ColorInput<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        ColorInput::Sequence(Cow::Borrowed(values.as_slice()))
    }
}

impl From<Vec<f64>> for ColorInput<'_> {
    fn from(values: Vec<f64>) -> Self {
        ColorInput::Sequence(Cow::Owned(values))
    }
}

impl<const N: usize> From<[f64; N]> for ColorInput<'_> {
    fn from(values: [f64; N]) -> Self {
        ColorInput::Sequence(Cow::Owned(values.to_vec()))
    }
}

impl From<[i32; 3]> for ColorInput<'_> {
    fn from(channels: [i32; 3]) -> Self {
        Rgb::from(channels).into()
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Sequence(Cow::Owned(vec![
            f64::from(rgb.r),
            f64::from(rgb.g),
            f64::from(rgb.b),
        ]))
    }
}

impl From<Rgba> for ColorInput<'_> {
    fn from(rgba: Rgba) -> Self {
        ColorInput::Sequence(Cow::Owned(vec![
            f64::from(rgba.r),
            f64::from(rgba.g),
            f64::from(rgba.b),
            rgba.a,
        ]))
    }
}

impl<'a> From<&'a Color> for ColorInput<'a> {
    fn from(color: &'a Color) -> Self {
        match color {
            Color::Hex(hex) => ColorInput::Text(hex.as_str()),
            Color::Rgb(rgb) => (*rgb).into(),
            Color::Rgba(rgba) => (*rgba).into(),
        }
    }
}
