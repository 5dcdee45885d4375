//! Light/dark classification using the HSP perceived-brightness model.
//!
//! See <http://alienryderflex.com/hsp.html>. The color is always resolved
//! through the converter as rgb; no separate detection happens here.

use swatch_common::{Brightness, ColorError, ColorInput, Encoding, Rgb};

use crate::convert::Converter;

/// Perceived brightness: `sqrt(0.299 r² + 0.587 g² + 0.114 b²)`.
pub fn hsp(rgb: &Rgb) -> f64 {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);
    (0.299 * (r * r) + 0.587 * (g * g) + 0.114 * (b * b)).sqrt()
}

impl Converter {
    pub fn brightness<'a>(&self, color: impl Into<ColorInput<'a>>) -> Result<Brightness, ColorError> {
        let color = self.convert(color, Encoding::Rgb)?;
        let rgb = color
            .as_rgb()
            .ok_or_else(|| ColorError::UnrecognizedFormat(color.to_string()))?;
        Ok(Brightness::from_hsp(hsp(&rgb)))
    }

    pub fn is_dark<'a>(&self, color: impl Into<ColorInput<'a>>) -> Result<bool, ColorError> {
        self.brightness(color).map(|b| b.is_dark())
    }

    pub fn is_light<'a>(&self, color: impl Into<ColorInput<'a>>) -> Result<bool, ColorError> {
        self.brightness(color).map(|b| b.is_light())
    }
}

/// Classify `color` as light or dark with default options.
pub fn brightness<'a>(color: impl Into<ColorInput<'a>>) -> Result<Brightness, ColorError> {
    Converter::default().brightness(color)
}

pub fn is_dark<'a>(color: impl Into<ColorInput<'a>>) -> Result<bool, ColorError> {
    Converter::default().is_dark(color)
}

pub fn is_light<'a>(color: impl Into<ColorInput<'a>>) -> Result<bool, ColorError> {
    Converter::default().is_light(color)
}
