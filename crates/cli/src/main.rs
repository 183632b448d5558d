//! # ftee
//!
//! Command-line entry point.
//!
//! Provides:
//! - Argument and configuration resolution
//! - Logging setup
//! - The split run, with a non-zero exit status on any failure

mod cli;
mod run;
mod summary;

use std::process::ExitCode;

use clap::Parser;
use observability::ObservabilityConfig;
use tracing::debug;

use cli::Cli;

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("ftee: {e:#}");
        return ExitCode::FAILURE;
    }

    debug!(version = env!("CARGO_PKG_VERSION"), "ftee starting");

    match run::run_split(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Split failed");
            eprintln!("ftee: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: cli.log_level().to_string(),
        force_level: cli.quiet || cli.verbose > 0,
    })
}
