//! Format detection.
//!
//! Classifies a raw [`ColorInput`] as hex, rgb, or rgba. The converter
//! consumes the tagged [`Source`] produced here so prefixes are only
//! scanned once.

use std::borrow::Cow;

use swatch_common::{ColorError, ColorInput, Encoding};

/// The components of an rgb/rgba value, still in their raw form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Components<'a> {
    Text(Cow<'a, str>),
    Sequence(&'a [f64]),
}

/// A detected input, tagged with its source encoding.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Source<'a> {
    Hex(Cow<'a, str>),
    Rgb(Components<'a>),
    Rgba(Components<'a>),
}

impl Source<'_> {
    pub(crate) fn encoding(&self) -> Encoding {
        match self {
            Source::Hex(_) => Encoding::Hex,
            Source::Rgb(_) => Encoding::Rgb,
            Source::Rgba(_) => Encoding::Rgba,
        }
    }
}

/// Determine the encoding of a color value.
///
/// Text is classified by prefix (`rgba(`, `rgb(`, `#`) after removing the
/// first space character only; `" #fff"` is hex but `"  #fff"` is not.
/// Number sequences of length 3 are rgb and length 4 are rgba.
///
/// Only the shape is checked: `format("rgb(x)")` is still `Rgb`.
pub fn format<'a>(color: impl Into<ColorInput<'a>>) -> Result<Encoding, ColorError> {
    let input = color.into();
    detect(&input).map(|source| source.encoding())
}

pub(crate) fn detect<'a>(input: &'a ColorInput<'_>) -> Result<Source<'a>, ColorError> {
    match input {
        ColorInput::Text(text) => {
            let trimmed = remove_first_space(text);
            if trimmed.starts_with("rgba(") {
                Ok(Source::Rgba(Components::Text(trimmed)))
            } else if trimmed.starts_with("rgb(") {
                Ok(Source::Rgb(Components::Text(trimmed)))
            } else if trimmed.starts_with('#') {
                Ok(Source::Hex(trimmed))
            } else {
                Err(ColorError::UnrecognizedFormat((*text).to_string()))
            }
        }
        ColorInput::Sequence(values) => match values.len() {
            4 => Ok(Source::Rgba(Components::Sequence(values))),
            3 => Ok(Source::Rgb(Components::Sequence(values))),
            n => Err(ColorError::UnrecognizedFormat(format!(
                "sequence of {n} numbers"
            ))),
        },
    }
}

fn remove_first_space(text: &str) -> Cow<'_, str> {
    match text.find(' ') {
        Some(i) => Cow::Owned(format!("{}{}", &text[..i], &text[i + 1..])),
        None => Cow::Borrowed(text),
    }
}
