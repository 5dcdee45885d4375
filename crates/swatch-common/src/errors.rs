use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("unrecognized color format: {0}")]
    UnrecognizedFormat(String),

    #[error("malformed hex color: {0}")]
    MalformedHex(String),

    #[error("malformed color components: {0}")]
    MalformedComponents(String),

    #[error("channel out of range: {0}")]
    ChannelOutOfRange(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}
