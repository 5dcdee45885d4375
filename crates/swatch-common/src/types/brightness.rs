use serde::{Deserialize, Serialize};
use std::fmt;

/// Light/dark verdict of the HSP brightness model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Dark,
}

impl Brightness {
    /// Perceived brightness above this is light; at or below it is dark.
    pub const THRESHOLD: f64 = 127.5;

    pub fn from_hsp(hsp: f64) -> Self {
        if hsp > Self::THRESHOLD {
            Brightness::Light
        } else {
            Brightness::Dark
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Brightness::Dark
    }

    pub fn is_light(&self) -> bool {
        *self == Brightness::Light
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brightness::Light => f.write_str("light"),
            Brightness::Dark => f.write_str("dark"),
        }
    }
}
