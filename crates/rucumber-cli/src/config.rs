//! Command configuration parsed from environment variables.
//!
//! Settings come from variables prefixed with `RUCUMBER_` and may be
//! overridden on the command line.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "RUCUMBER_LOG_LEVEL";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every line transition and context write.
    Trace,
    /// Step resolution and hook invocations.
    Debug,
    /// Feature and scenario results.
    Info,
    /// Structural warnings, undefined steps and overwritten patterns.
    #[default]
    Warn,
    /// Step and hook failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for a `rucumber` invocation.
///
/// # Environment Variables
///
/// - `RUCUMBER_LOG_LEVEL`: log level (trace, debug, info, warn, error)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps variable names to
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_ENV)
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or_default();
        Ok(Self { log_level })
    }

    /// Apply command-line overrides, which take precedence over the
    /// environment.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
