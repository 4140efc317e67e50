//! Grammar checks behind `rucumber check`.

use std::path::{Path, PathBuf};

use rucumber::{Feature, ParsedFeature, feature_paths, parse_feature_file};
use serde::Serialize;

/// Verdict for one checked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Parsed and ended in a terminal state.
    Ok,
    /// Parsed but stopped short of a terminal state.
    Incomplete,
    /// Could not be read, listed or parsed.
    Invalid,
}

impl CheckStatus {
    /// Lower-case label used in text output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Incomplete => "incomplete",
            Self::Invalid => "invalid",
        }
    }
}

/// Result of checking a single path.
#[derive(Debug, Clone, Serialize)]
pub struct FileCheck {
    /// The checked file, or the directory that could not be listed.
    pub path: PathBuf,
    /// Verdict.
    pub status: CheckStatus,
    /// The parsed feature; absent for invalid files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    /// Warning or error text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileCheck {
    fn parsed(path: PathBuf, parsed: ParsedFeature) -> Self {
        let ParsedFeature { feature, warning } = parsed;
        let (status, message) = match warning {
            Some(warning) => (CheckStatus::Incomplete, Some(warning.to_string())),
            None => (CheckStatus::Ok, None),
        };
        Self {
            path,
            status,
            feature: Some(feature),
            message,
        }
    }

    fn invalid(path: PathBuf, error: &dyn std::error::Error) -> Self {
        tracing::error!(path = %path.display(), "{error}");
        Self {
            path,
            status: CheckStatus::Invalid,
            feature: None,
            message: Some(error.to_string()),
        }
    }
}

/// Check every feature file named by `inputs`.
///
/// Directories expand to the `*.feature` files directly inside them, in
/// sorted order. Failures are recorded per file; checking never stops early.
#[must_use]
pub fn check_paths<P: AsRef<Path>>(inputs: &[P]) -> Vec<FileCheck> {
    let mut checks = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            match feature_paths(input) {
                Ok(paths) => checks.extend(paths.into_iter().map(check_file)),
                Err(err) => checks.push(FileCheck::invalid(input.to_path_buf(), &err)),
            }
        } else {
            checks.push(check_file(input.to_path_buf()));
        }
    }
    checks
}

fn check_file(path: PathBuf) -> FileCheck {
    tracing::debug!(path = %path.display(), "checking feature file");
    match parse_feature_file(&path) {
        Ok(parsed) => FileCheck::parsed(path, parsed),
        Err(err) => FileCheck::invalid(path, &err),
    }
}

/// Whether the checks amount to a failed run.
///
/// Invalid files always fail; incomplete files fail only when `strict`.
#[must_use]
pub fn has_failures(checks: &[FileCheck], strict: bool) -> bool {
    checks.iter().any(|check| match check.status {
        CheckStatus::Ok => false,
        CheckStatus::Incomplete => strict,
        CheckStatus::Invalid => true,
    })
}
