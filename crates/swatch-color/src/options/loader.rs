//! Loading converter options from TOML: a specific path or the platform default.

use std::path::{Path, PathBuf};
use swatch_common::ConfigError;
use tracing::info;

use super::ConvertOptions;

/// Load options from a specific TOML file path.
///
/// Missing fields take their defaults. The result is validated before it
/// is returned.
pub fn load_from_path(path: &Path) -> Result<ConvertOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let options: ConvertOptions = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    options.validate()?;

    info!("loaded converter options from {}", path.display());
    Ok(options)
}

/// Load options from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/swatch/options.toml`
/// On Linux: `~/.config/swatch/options.toml`
///
/// Returns defaults when the file does not exist.
pub fn load_default() -> Result<ConvertOptions, ConfigError> {
    load_or_default(&default_options_path()?)
}

/// Load options from `path`, or return defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<ConvertOptions, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no options found at {}, using defaults", path.display());
            Ok(ConvertOptions::default())
        }
        result => result,
    }
}

/// Get the platform-specific default options file path.
pub fn default_options_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("swatch").join("options.toml"))
}
