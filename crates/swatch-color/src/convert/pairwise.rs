//! Pairwise transforms between the three encodings.
//!
//! These are the edges of the conversion graph. They do no range checking;
//! the [`Converter`](super::Converter) decides how strict to be.

use regex::Regex;
use std::sync::LazyLock;

use swatch_common::{ColorError, Rgb, Rgba};

use crate::detect::Components;

/// Everything that is not an ASCII letter or digit is dropped from hex input.
static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// Parse `#RGB` or `#RRGGBB` into channels.
pub(super) fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = NON_ALNUM_RE.replace_all(hex, "");
    let malformed = || ColorError::MalformedHex(hex.to_string());
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| malformed());

    match digits.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = channel(&digits[0..1])? * 17;
            let g = channel(&digits[1..2])? * 17;
            let b = channel(&digits[2..3])? * 17;
            Ok(Rgb::new(r.into(), g.into(), b.into()))
        }
        6 => {
            let r = channel(&digits[0..2])?;
            let g = channel(&digits[2..4])?;
            let b = channel(&digits[4..6])?;
            Ok(Rgb::new(r.into(), g.into(), b.into()))
        }
        _ => Err(malformed()),
    }
}

/// Canonical hex text: `#` plus the uppercased digits, separators dropped.
pub(super) fn canonical_hex(hex: &str) -> String {
    format!("#{}", NON_ALNUM_RE.replace_all(hex, "").to_uppercase())
}

/// Render channels as uppercase `#RRGGBB`.
///
/// Channels outside 0-255 are not clamped: they render as signed base-16
/// text, so `256` becomes `100` and `-1` becomes `-1`.
pub(super) fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{}{}{}",
        channel_to_hex(rgb.r),
        channel_to_hex(rgb.g),
        channel_to_hex(rgb.b)
    )
    .to_uppercase()
}

pub(super) fn rgba_to_hex(rgba: Rgba) -> String {
    rgb_to_hex(rgba_to_rgb(rgba))
}

pub(super) fn rgb_to_rgba(rgb: Rgb, alpha: f64) -> Rgba {
    rgb.with_alpha(alpha)
}

pub(super) fn rgba_to_rgb(rgba: Rgba) -> Rgb {
    rgba.rgb()
}

/// Resolve raw rgb components (`rgb(...)` text or a 3-number sequence).
pub(super) fn components_to_rgb(components: &Components<'_>) -> Result<Rgb, ColorError> {
    match components {
        Components::Text(text) => text_to_rgb(text),
        Components::Sequence(values) => {
            let [r, g, b] = values else {
                return Err(count_mismatch(3, values.len(), &format!("{values:?}")));
            };
            let source = format!("{values:?}");
            Ok(Rgb::new(
                number_to_channel(*r, &source)?,
                number_to_channel(*g, &source)?,
                number_to_channel(*b, &source)?,
            ))
        }
    }
}

/// Resolve raw rgba components (`rgba(...)` text or a 4-number sequence).
pub(super) fn components_to_rgba(components: &Components<'_>) -> Result<Rgba, ColorError> {
    match components {
        Components::Text(text) => text_to_rgba(text),
        Components::Sequence(values) => {
            let [r, g, b, a] = values else {
                return Err(count_mismatch(4, values.len(), &format!("{values:?}")));
            };
            let source = format!("{values:?}");
            Ok(Rgba::new(
                number_to_channel(*r, &source)?,
                number_to_channel(*g, &source)?,
                number_to_channel(*b, &source)?,
                number_to_alpha(*a, &source)?,
            ))
        }
    }
}

fn text_to_rgb(text: &str) -> Result<Rgb, ColorError> {
    let body = strip_wrapper(text, "rgb(");
    let tokens: Vec<&str> = body.split(',').collect();
    let [r, g, b] = tokens.as_slice() else {
        return Err(count_mismatch(3, tokens.len(), text));
    };
    Ok(Rgb::new(
        token_to_channel(r, text)?,
        token_to_channel(g, text)?,
        token_to_channel(b, text)?,
    ))
}

fn text_to_rgba(text: &str) -> Result<Rgba, ColorError> {
    let body = strip_wrapper(text, "rgba(");
    let tokens: Vec<&str> = body.split(',').collect();
    let [r, g, b, a] = tokens.as_slice() else {
        return Err(count_mismatch(4, tokens.len(), text));
    };
    let alpha = parse_number(a, text)?;
    Ok(Rgba::new(
        token_to_channel(r, text)?,
        token_to_channel(g, text)?,
        token_to_channel(b, text)?,
        number_to_alpha(alpha, text)?,
    ))
}

/// Drop the first `prefix`, the first `)`, and every space.
fn strip_wrapper(text: &str, prefix: &str) -> String {
    text.replacen(prefix, "", 1)
        .replacen(')', "", 1)
        .replace(' ', "")
}

fn channel_to_hex(value: i32) -> String {
    let digits = if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:x}")
    };
    if digits.len() == 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

fn parse_number(token: &str, source: &str) -> Result<f64, ColorError> {
    token.trim().parse::<f64>().map_err(|_| {
        ColorError::MalformedComponents(format!("`{token}` is not a number in {source}"))
    })
}

fn token_to_channel(token: &str, source: &str) -> Result<i32, ColorError> {
    number_to_channel(parse_number(token, source)?, source)
}

/// Channels must be whole numbers; `255.0` is accepted, `12.5` is not.
fn number_to_channel(value: f64, source: &str) -> Result<i32, ColorError> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        Ok(value as i32)
    } else {
        Err(ColorError::MalformedComponents(format!(
            "channel {value} is not an integer in {source}"
        )))
    }
}

fn number_to_alpha(value: f64, source: &str) -> Result<f64, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::MalformedComponents(format!(
            "alpha {value} is not finite in {source}"
        )))
    }
}

fn count_mismatch(expected: usize, found: usize, source: &str) -> ColorError {
    ColorError::MalformedComponents(format!(
        "expected {expected} components, found {found} in {source}"
    ))
}
