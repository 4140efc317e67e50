//! Loading feature files from disk.
//!
//! Each file is read in full, closed, then parsed. Whether a structurally
//! incomplete feature is accepted depends on
//! [`config::structure_policy`](crate::config::structure_policy).

use std::io;
use std::path::{Path, PathBuf};

use rucumber_grammar::{Feature, ParseError, StructuralWarning, parse_feature_file};

use crate::config;

/// File extension recognised by [`feature_paths`].
pub const FEATURE_EXTENSION: &str = "feature";

/// Errors raised while loading feature files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The file could not be read or broke the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Strict structure is enabled and the file ended mid-scenario.
    #[error("rejected incomplete {warning}")]
    Incomplete {
        /// The structural warning that was promoted to an error.
        warning: StructuralWarning,
    },
    /// A feature directory could not be listed.
    #[error("failed to read feature directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// The file or directory the error concerns, when known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Parse(err) => Some(err.path()),
            Self::Incomplete { warning } => warning.path.as_deref(),
            Self::ReadDir { path, .. } => Some(path),
        }
    }
}

/// Load one feature file.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] when the file cannot be read or parsed, and
/// [`LoadError::Incomplete`] when strict structure is enabled and the file
/// does not end in a terminal state.
pub fn load_feature(path: &Path) -> Result<Feature, LoadError> {
    let parsed = parse_feature_file(path)?;
    config::structure_policy()
        .admit(parsed)
        .map_err(|warning| LoadError::Incomplete { warning })
}

/// List the `*.feature` files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`LoadError::ReadDir`] when the directory cannot be listed.
pub fn feature_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir)? {
        let path = entry.map_err(read_dir)?.path();
        let is_feature = path
            .extension()
            .is_some_and(|ext| ext == FEATURE_EXTENSION);
        if is_feature && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    log::debug!("found {} feature file(s) in {}", paths.len(), dir.display());
    Ok(paths)
}

/// Load every feature file in `dir`, in sorted order.
///
/// Loading stops at the first file that fails; use
/// [`Runner::run_dir`](crate::Runner::run_dir) to keep going past broken
/// files.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered.
pub fn load_features(dir: &Path) -> Result<Vec<Feature>, LoadError> {
    feature_paths(dir)?
        .iter()
        .map(|path| load_feature(path))
        .collect()
}
