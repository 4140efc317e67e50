//! Structured logging for the `rucumber` command.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! Records emitted through the `log` facade by the library crates are
//! forwarded into the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `RUCUMBER_LOG_LEVEL`
/// 3. `warn`
///
/// A second call is ignored; the first subscriber stays installed.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
