//! `rucumber` binary: project scaffolding and feature-file checks.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use rucumber_cli::cli::{Cli, run};
use rucumber_cli::config::CliConfig;
use rucumber_cli::error::CliError;
use rucumber_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting rucumber");

    let mut stdout = io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level))
}
