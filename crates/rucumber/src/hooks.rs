//! Optional feature-level hooks.

use std::fmt;

use rucumber_grammar::Feature;

use crate::context::StepContext;
use crate::types::{FeatureHook, StepError, StepResult};

/// Which hook ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Runs before the first scenario of a feature.
    BeforeFeature,
    /// Runs after the last scenario of a feature.
    AfterFeature,
}

impl HookKind {
    /// Snake-case name of the hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeFeature => "before_feature",
            Self::AfterFeature => "after_feature",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hook returned an error or panicked.
#[derive(Debug, thiserror::Error)]
#[error("{kind} hook failed: {source}")]
pub struct HookError {
    /// The failing hook.
    pub kind: HookKind,
    /// What went wrong.
    #[source]
    pub source: StepError,
}

/// Hooks run around every feature. Either may be absent.
///
/// Both receive the shared context and the feature about to run (or just
/// run), so they can branch on its tags.
///
/// # Examples
///
/// ```
/// use rucumber::Hooks;
///
/// let hooks = Hooks::new().before_feature(|ctx, feature| {
///     if feature.has_tag("init_cleanup") {
///         ctx.insert("scratch", std::env::temp_dir());
///     }
///     Ok(())
/// });
/// assert!(hooks.has_before_feature());
/// assert!(!hooks.has_after_feature());
/// ```
#[derive(Default)]
pub struct Hooks {
    before_feature: Option<FeatureHook>,
    after_feature: Option<FeatureHook>,
}

impl Hooks {
    /// No hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hook run before each feature.
    #[must_use]
    pub fn before_feature<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut StepContext, &Feature) -> StepResult + 'static,
    {
        self.before_feature = Some(Box::new(hook));
        self
    }

    /// Set the hook run after each feature.
    #[must_use]
    pub fn after_feature<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut StepContext, &Feature) -> StepResult + 'static,
    {
        self.after_feature = Some(Box::new(hook));
        self
    }

    /// Whether a before-feature hook is configured.
    #[must_use]
    pub fn has_before_feature(&self) -> bool {
        self.before_feature.is_some()
    }

    /// Whether an after-feature hook is configured.
    #[must_use]
    pub fn has_after_feature(&self) -> bool {
        self.after_feature.is_some()
    }

    pub(crate) fn hook_mut(&mut self, kind: HookKind) -> Option<&mut FeatureHook> {
        match kind {
            HookKind::BeforeFeature => self.before_feature.as_mut(),
            HookKind::AfterFeature => self.after_feature.as_mut(),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_feature", &self.has_before_feature())
            .field("after_feature", &self.has_after_feature())
            .finish()
    }
}
