//! Split command implementation.

use anyhow::Result;
use config_loader::ConfigLoader;
use contracts::RunConfig;
use tracing::info;

use crate::cli::Cli;
use crate::summary::print_summary;

/// Resolve the effective configuration: flag/env > config file > defaults
pub fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;

    if let Some(ref delimiter) = cli.delimiter {
        info!(delimiter = %delimiter, "Overriding delimiter from CLI");
        config.delimiter = delimiter.clone();
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Split every input; outputs survive only if the whole run succeeds
pub fn run_split(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    info!(
        delimiter = %config.delimiter,
        inputs = cli.inputs.len(),
        "Splitting inputs"
    );

    let report = router::split_files(&config, &cli.inputs)?;

    if cli.summary {
        print_summary(&report, cli.json)?;
    }
    Ok(())
}
