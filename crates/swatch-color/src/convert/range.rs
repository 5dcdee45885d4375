//! Channel range checks used when strict channel validation is enabled.

use swatch_common::{ColorError, Rgb, Rgba};

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_channels(errors: &mut Vec<String>, rgb: &Rgb) {
    validate_range(errors, "red", rgb.r, 0, 255);
    validate_range(errors, "green", rgb.g, 0, 255);
    validate_range(errors, "blue", rgb.b, 0, 255);
}

fn finish(errors: Vec<String>) -> Result<(), ColorError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ColorError::ChannelOutOfRange(errors.join("; ")))
    }
}

pub(super) fn check_rgb(rgb: &Rgb) -> Result<(), ColorError> {
    let mut errors = Vec::new();
    validate_channels(&mut errors, rgb);
    finish(errors)
}

pub(super) fn check_rgba(rgba: &Rgba) -> Result<(), ColorError> {
    let mut errors = Vec::new();
    validate_channels(&mut errors, &rgba.rgb());
    validate_range_f64(&mut errors, "alpha", rgba.a, 0.0, 1.0);
    finish(errors)
}

pub(super) fn check_alpha(alpha: f64) -> Result<(), ColorError> {
    let mut errors = Vec::new();
    validate_range_f64(&mut errors, "alpha", alpha, 0.0, 1.0);
    finish(errors)
}
