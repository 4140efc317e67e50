//! Project scaffolding for `rucumber init` and `rucumber cleanup`.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::error::CliError;

/// Name of the directory holding feature files.
pub const FEATURES_DIR: &str = "features";
/// Name of the step-definition directory inside [`FEATURES_DIR`].
pub const STEPS_DIR: &str = "steps";
/// Feature file created by `init`.
pub const FEATURE_FILE: &str = "all.feature";
/// Step-definition file created by `init`.
pub const STEPS_FILE: &str = "all_steps.rs";

const FEATURE_TEMPLATE: &str = "# Write your feature from here\n";
const STEPS_TEMPLATE: &str = "// Define your scenario steps here\n";

/// The directory layout managed by `init` and `cleanup`, rooted at a base
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    root: PathBuf,
}

impl Scaffold {
    /// Layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/features`
    #[must_use]
    pub fn features_dir(&self) -> PathBuf {
        self.root.join(FEATURES_DIR)
    }

    /// `<root>/features/steps`
    #[must_use]
    pub fn steps_dir(&self) -> PathBuf {
        self.features_dir().join(STEPS_DIR)
    }

    /// `<root>/features/all.feature`
    #[must_use]
    pub fn feature_file(&self) -> PathBuf {
        self.features_dir().join(FEATURE_FILE)
    }

    /// `<root>/features/steps/all_steps.rs`
    #[must_use]
    pub fn steps_file(&self) -> PathBuf {
        self.steps_dir().join(STEPS_FILE)
    }

    /// Whether the features directory exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.features_dir().is_dir()
    }

    /// Create the layout, returning every path created in order.
    ///
    /// # Errors
    ///
    /// Fails with [`CliError::AlreadyInitialised`] when the features
    /// directory exists, or with the I/O error that stopped creation. A
    /// partially created layout is left in place.
    pub fn create(&self) -> Result<Vec<PathBuf>> {
        let features = self.features_dir();
        if features.exists() {
            return Err(CliError::AlreadyInitialised { path: features }.into());
        }
        create_dir(&features)?;
        create_dir(&self.steps_dir())?;
        write_template(&self.feature_file(), FEATURE_TEMPLATE)?;
        write_template(&self.steps_file(), STEPS_TEMPLATE)?;
        Ok(vec![
            features,
            self.steps_dir(),
            self.feature_file(),
            self.steps_file(),
        ])
    }

    /// Remove the features directory recursively.
    ///
    /// Returns the removed path, or `None` when there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns the I/O error that stopped removal.
    pub fn remove(&self) -> Result<Option<PathBuf>> {
        let features = self.features_dir();
        if !features.is_dir() {
            tracing::debug!(path = %features.display(), "no features directory to remove");
            return Ok(None);
        }
        fs::remove_dir_all(&features)
            .wrap_err_with(|| format!("failed to remove {}", features.display()))?;
        Ok(Some(features))
    }
}

fn create_dir(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir(path).wrap_err_with(|| format!("failed to create {}", path.display()))
}

fn write_template(path: &Path, body: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "writing template");
    fs::write(path, body).wrap_err_with(|| format!("failed to write {}", path.display()))
}
