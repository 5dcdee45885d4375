pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, SwatchError};
pub use types::{Brightness, Color, ColorInput, Encoding, Rgb, Rgba};

pub type Result<T> = std::result::Result<T, SwatchError>;
