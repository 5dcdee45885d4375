//! Command execution: resolve options, read the color argument, and render
//! the result as text or JSON.

use serde::Serialize;
use swatch_color::{options, ColorInput, ConvertOptions, Converter};
use swatch_common::{Result, SwatchError};

use crate::cli::{Args, Command};

/// A color argument as typed on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorArg {
    Text(String),
    Numbers(Vec<f64>),
}

impl ColorArg {
    /// Number lists start with a digit, sign, or dot; anything else is text.
    pub fn parse(raw: &str) -> Result<Self> {
        let looks_numeric = raw
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
        if !looks_numeric {
            return Ok(ColorArg::Text(raw.to_string()));
        }

        raw.split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    SwatchError::Other(format!("invalid number `{}` in `{raw}`", part.trim()))
                })
            })
            .collect::<Result<Vec<f64>>>()
            .map(ColorArg::Numbers)
    }

    pub fn input(&self) -> ColorInput<'_> {
        match self {
            ColorArg::Text(text) => ColorInput::from(text),
            ColorArg::Numbers(values) => ColorInput::from(values),
        }
    }
}

/// Resolve converter options: options file, then command-line overrides.
pub fn resolve_options(args: &Args) -> Result<ConvertOptions> {
    let mut options = match &args.config {
        Some(path) => {
            tracing::info!("Using options override: {}", path.display());
            options::load_from_path(path)?
        }
        None => options::load_default().unwrap_or_else(|e| {
            tracing::warn!("Options load failed, using defaults: {e}");
            ConvertOptions::default()
        }),
    };

    if args.best_effort {
        options.best_effort = true;
    }
    if args.strict_channels {
        options.strict_channels = true;
    }
    Ok(options)
}

/// Run the parsed command and return what should be printed.
pub fn run(args: &Args) -> Result<String> {
    let converter = Converter::new(resolve_options(args)?);
    execute(&converter, &args.command, args.json)
}

pub fn execute(converter: &Converter, command: &Command, json: bool) -> Result<String> {
    match command {
        Command::Format { color } => {
            let arg = ColorArg::parse(color)?;
            let encoding = swatch_color::format(arg.input())?;
            render(&encoding, json)
        }
        Command::Convert { color, to, alpha } => {
            let arg = ColorArg::parse(color)?;
            let converted = match alpha {
                Some(alpha) => converter.convert_with_alpha(arg.input(), *to, *alpha)?,
                None => converter.convert(arg.input(), *to)?,
            };
            render(&converted, json)
        }
        Command::Brightness { color } => {
            let arg = ColorArg::parse(color)?;
            let verdict = converter.brightness(arg.input())?;
            render(&verdict, json)
        }
    }
}

fn render<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(value).map_err(|e| SwatchError::Other(format!("json error: {e}")))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use swatch_color::Encoding;

    fn run_args(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv).unwrap();
        execute(&Converter::new(resolve_flags(&args)), &args.command, args.json)
    }

    // Flags only, so tests never read the user's options file.
    fn resolve_flags(args: &Args) -> ConvertOptions {
        ConvertOptions {
            best_effort: args.best_effort,
            strict_channels: args.strict_channels,
            ..ConvertOptions::default()
        }
    }

    #[test]
    fn color_arg_text_and_numbers() {
        assert_eq!(
            ColorArg::parse("#0af").unwrap(),
            ColorArg::Text("#0af".into())
        );
        assert_eq!(
            ColorArg::parse("rgb(1, 2, 3)").unwrap(),
            ColorArg::Text("rgb(1, 2, 3)".into())
        );
        assert_eq!(
            ColorArg::parse("255, 0, 0").unwrap(),
            ColorArg::Numbers(vec![255.0, 0.0, 0.0])
        );
        assert_eq!(
            ColorArg::parse("-1,0,0,0.5").unwrap(),
            ColorArg::Numbers(vec![-1.0, 0.0, 0.0, 0.5])
        );
    }

    #[test]
    fn color_arg_rejects_bad_numbers() {
        let err = ColorArg::parse("1,two,3").unwrap_err();
        assert!(err.to_string().contains("invalid number `two`"));
    }

    #[test]
    fn format_command() {
        assert_eq!(run_args(&["swatch", "format", "rgb(1,2,3)"]).unwrap(), "rgb");
        assert_eq!(run_args(&["swatch", "format", "1,2,3,1"]).unwrap(), "rgba");
        assert!(run_args(&["swatch", "format", "banana"]).is_err());
    }

    #[test]
    fn convert_command() {
        assert_eq!(
            run_args(&["swatch", "convert", "255,0,0", "--to", "hex"]).unwrap(),
            "#FF0000"
        );
        assert_eq!(
            run_args(&["swatch", "convert", "#fff", "-t", "rgba", "-a", "0.5"]).unwrap(),
            "rgba(255, 255, 255, 0.5)"
        );
    }

    #[test]
    fn convert_command_json() {
        assert_eq!(
            run_args(&["swatch", "convert", "#FFF", "--to", "rgb", "--json"]).unwrap(),
            "[255,255,255]"
        );
        assert_eq!(
            run_args(&["swatch", "format", "#FFF", "--json"]).unwrap(),
            "\"hex\""
        );
    }

    #[test]
    fn brightness_command() {
        assert_eq!(run_args(&["swatch", "brightness", "0,0,0"]).unwrap(), "dark");
        assert_eq!(
            run_args(&["swatch", "brightness", "#ffffff", "--json"]).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn mode_flags_reach_the_converter() {
        assert!(run_args(&["swatch", "convert", "#12345", "--to", "rgb"]).is_err());
        assert_eq!(
            run_args(&["swatch", "convert", "#12345", "--to", "rgb", "--best-effort"]).unwrap(),
            "rgb(0, 0, 0)"
        );
        assert!(
            run_args(&["swatch", "convert", "300,0,0", "--to", "hex", "--strict-channels"])
                .is_err()
        );
    }

    #[test]
    fn negative_alpha_reaches_the_converter() {
        assert_eq!(
            run_args(&["swatch", "convert", "#fff", "--to", "rgba", "--alpha", "-0.5"]).unwrap(),
            "rgba(255, 255, 255, -0.5)"
        );
        let err = run_args(&[
            "swatch",
            "convert",
            "#fff",
            "--to",
            "rgba",
            "--alpha",
            "-0.5",
            "--strict-channels",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("alpha = -0.5 is out of range [0, 1]"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "default_alpha = 0.25\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "swatch",
            "convert",
            "#000",
            "--to",
            "rgba",
            "--config",
            path_arg.as_str(),
        ])
        .unwrap();
        assert_eq!(run(&args).unwrap(), "rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn unknown_target_is_rejected_by_the_parser() {
        assert!(Args::try_parse_from(["swatch", "convert", "#fff", "--to", "hsl"]).is_err());
        assert_eq!(Encoding::Rgba.to_string(), "rgba");
    }
}
