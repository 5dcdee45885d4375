//! Color format detection, conversion, and brightness classification.
//!
//! Colors move between three encodings: hex strings (`#RGB`, `#RRGGBB`),
//! rgb triples, and rgba quadruples with a 0.0-1.0 alpha. Every operation
//! is a pure function of its input.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::{convert, format, is_dark, Color, Encoding, Rgb};
//!
//! assert_eq!(format("rgb(1,2,3)").unwrap(), Encoding::Rgb);
//! assert_eq!(convert("#FFF", Encoding::Rgb).unwrap(), Color::Rgb(Rgb::new(255, 255, 255)));
//! assert!(is_dark([0, 0, 0]).unwrap());
//! ```

pub mod brightness;
pub mod convert;
pub mod detect;
pub mod options;

pub use brightness::{brightness, hsp, is_dark, is_light};
pub use convert::{convert, convert_with_alpha, Converter};
pub use detect::format;
pub use options::ConvertOptions;

// Re-export the value types so callers only need this crate.
pub use swatch_common::{Brightness, Color, ColorError, ColorInput, Encoding, Rgb, Rgba};
