//! Converter options and their TOML loader.
//!
//! All fields use serde defaults so partial option files work.

mod loader;


pub use loader::{default_options_path, load_default, load_from_path, load_or_default};

use serde::{Deserialize, Serialize};
use swatch_common::ConfigError;

/// How tolerant the converter is of bad input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Malformed hex converts to `[0, 0, 0]` instead of failing.
    pub best_effort: bool,
    /// Reject channels outside 0-255 and alpha outside 0.0-1.0.
    pub strict_channels: bool,
    /// Alpha appended by rgb -> rgba and hex -> rgba when none is given.
    pub default_alpha: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            best_effort: false,
            strict_channels: false,
            default_alpha: 1.0,
        }
    }
}

impl ConvertOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_alpha) {
            return Err(ConfigError::ValidationError(format!(
                "default_alpha = {} is out of range [0, 1]",
                self.default_alpha
            )));
        }
        Ok(())
    }
}
