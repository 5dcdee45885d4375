//! Conversion between hex, rgb, and rgba encodings.
//!
//! The detector tags the input once; [`Converter::convert_with_alpha`] then
//! matches on (source, target) and runs the matching pairwise transform.
//! Identity pairs hand the value back unchanged; hex is uppercased and
//! loses any separators.

mod pairwise;
mod range;


use swatch_common::{Color, ColorError, ColorInput, Encoding, Rgb, Rgba};
use tracing::{debug, warn};

use crate::detect::{detect, Source};
use crate::options::ConvertOptions;

/// Stateless color converter. Holds only the options it was built with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `color` into `target`, using the configured default alpha
    /// when an alpha channel has to be added.
    pub fn convert<'a>(
        &self,
        color: impl Into<ColorInput<'a>>,
        target: Encoding,
    ) -> Result<Color, ColorError> {
        self.convert_with_alpha(color, target, self.options.default_alpha)
    }

    /// Convert `color` into `target`.
    ///
    /// `alpha` is only used by the rgb -> rgba and hex -> rgba edges; an
    /// rgba source keeps its own alpha.
    pub fn convert_with_alpha<'a>(
        &self,
        color: impl Into<ColorInput<'a>>,
        target: Encoding,
        alpha: f64,
    ) -> Result<Color, ColorError> {
        let input = color.into();
        let source = detect(&input)?;
        debug!(source = %source.encoding(), %target, "converting color");

        let color = match (source, target) {
            (Source::Hex(hex), Encoding::Hex) => {
                self.hex_to_rgb(&hex)?;
                Color::Hex(pairwise::canonical_hex(&hex))
            }
            (Source::Hex(hex), Encoding::Rgb) => Color::Rgb(self.hex_to_rgb(&hex)?),
            (Source::Hex(hex), Encoding::Rgba) => Color::Rgba(self.hex_to_rgba(&hex, alpha)?),
            (Source::Rgb(components), Encoding::Hex) => {
                let rgb = self.checked_rgb(pairwise::components_to_rgb(&components)?)?;
                Color::Hex(pairwise::rgb_to_hex(rgb))
            }
            (Source::Rgb(components), Encoding::Rgb) => {
                Color::Rgb(self.checked_rgb(pairwise::components_to_rgb(&components)?)?)
            }
            (Source::Rgb(components), Encoding::Rgba) => {
                let rgb = self.checked_rgb(pairwise::components_to_rgb(&components)?)?;
                Color::Rgba(pairwise::rgb_to_rgba(rgb, self.checked_alpha(alpha)?))
            }
            (Source::Rgba(components), Encoding::Hex) => {
                let rgba = self.checked_rgba(pairwise::components_to_rgba(&components)?)?;
                Color::Hex(pairwise::rgba_to_hex(rgba))
            }
            (Source::Rgba(components), Encoding::Rgb) => {
                let rgba = self.checked_rgba(pairwise::components_to_rgba(&components)?)?;
                Color::Rgb(pairwise::rgba_to_rgb(rgba))
            }
            (Source::Rgba(components), Encoding::Rgba) => {
                Color::Rgba(self.checked_rgba(pairwise::components_to_rgba(&components)?)?)
            }
        };

        Ok(color)
    }

    /// Hex -> rgb, substituting black for malformed hex in best-effort mode.
    fn hex_to_rgb(&self, hex: &str) -> Result<Rgb, ColorError> {
        match pairwise::hex_to_rgb(hex) {
            Err(ColorError::MalformedHex(_)) if self.options.best_effort => {
                warn!(hex, "malformed hex color, using [0, 0, 0]");
                Ok(Rgb::new(0, 0, 0))
            }
            result => result,
        }
    }

    fn hex_to_rgba(&self, hex: &str, alpha: f64) -> Result<Rgba, ColorError> {
        let rgb = self.hex_to_rgb(hex)?;
        Ok(pairwise::rgb_to_rgba(rgb, self.checked_alpha(alpha)?))
    }

    fn checked_rgb(&self, rgb: Rgb) -> Result<Rgb, ColorError> {
        if self.options.strict_channels {
            range::check_rgb(&rgb)?;
        }
        Ok(rgb)
    }

    fn checked_rgba(&self, rgba: Rgba) -> Result<Rgba, ColorError> {
        if self.options.strict_channels {
            range::check_rgba(&rgba)?;
        }
        Ok(rgba)
    }

    fn checked_alpha(&self, alpha: f64) -> Result<f64, ColorError> {
        if self.options.strict_channels {
            range::check_alpha(alpha)?;
        }
        Ok(alpha)
    }
}

/// Convert `color` into `target` with default options and alpha `1.0`.
pub fn convert<'a>(color: impl Into<ColorInput<'a>>, target: Encoding) -> Result<Color, ColorError> {
    Converter::default().convert(color, target)
}

/// Convert `color` into `target` with default options and the given alpha.
pub fn convert_with_alpha<'a>(
    color: impl Into<ColorInput<'a>>,
    target: Encoding,
    alpha: f64,
) -> Result<Color, ColorError> {
    Converter::default().convert_with_alpha(color, target, alpha)
}
