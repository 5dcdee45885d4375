mod cli;
mod run;

use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging on stderr so stdout only carries results
    let log_directive = args.log_level.as_deref().unwrap_or("swatch=warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::WARN.into()),
            ),
        )
        .init();

    tracing::debug!("swatch v{} starting", env!("CARGO_PKG_VERSION"));

    match run::run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
