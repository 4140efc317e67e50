//! Error types for the `rucumber` command.

use std::path::PathBuf;

use thiserror::Error;

/// Failures the command reports with a dedicated message.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `init` found an existing features directory.
    #[error("{} already exists; run `rucumber cleanup` first", .path.display())]
    AlreadyInitialised {
        /// The existing directory.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_displays_message() {
        let error = CliError::InvalidConfig("unknown log level 'loud'".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: unknown log level 'loud'"
        );
    }

    #[test]
    fn already_initialised_names_the_directory() {
        let error = CliError::AlreadyInitialised {
            path: PathBuf::from("work/features"),
        };
        assert_eq!(
            error.to_string(),
            "work/features already exists; run `rucumber cleanup` first"
        );
    }
}
