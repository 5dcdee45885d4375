use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swatch_color::Encoding;

/// swatch: convert colors between hex, rgb, and rgba, and tell light from dark.
///
/// COLOR is either color text (`#0af`, `rgb(0, 170, 255)`, `rgba(0,170,255,0.5)`)
/// or a comma-separated number list (`0,170,255`).
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat malformed hex as black instead of failing.
    #[arg(long, global = true)]
    pub best_effort: bool,

    /// Reject channels outside 0-255 and alpha outside 0-1.
    #[arg(long, global = true)]
    pub strict_channels: bool,

    /// Options file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the encoding of a color (hex, rgb, or rgba).
    Format {
        #[arg(allow_hyphen_values = true)]
        color: String,
    },

    /// Convert a color into another encoding.
    Convert {
        #[arg(allow_hyphen_values = true)]
        color: String,

        /// Target encoding: hex, rgb, or rgba.
        #[arg(short = 't', long)]
        to: Encoding,

        /// Alpha appended when converting to rgba.
        #[arg(short = 'a', long, allow_negative_numbers = true)]
        alpha: Option<f64>,
    },

    /// Classify a color as light or dark.
    Brightness {
        #[arg(allow_hyphen_values = true)]
        color: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
