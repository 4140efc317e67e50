//! Runtime configuration for rucumber.
//!
//! Loaders consult the [`StructurePolicy`] to decide what happens to a
//! feature file that parses cleanly but stops before a terminal grammar
//! state, such as a scenario cut off after its `Given` steps. The lenient
//! policy runs it and keeps the structural warning; the strict policy rejects
//! the file.
//!
//! The active policy comes from, in order: an in-process override
//! ([`set_structure_policy`]), the `RUCUMBER_STRICT_STRUCTURE` environment
//! variable, then [`StructurePolicy::Lenient`].

use std::sync::{PoisonError, RwLock};

use rucumber_grammar::{Feature, ParsedFeature, StructuralWarning};

/// Environment variable read by [`structure_policy`].
pub const STRICT_STRUCTURE_ENV: &str = "RUCUMBER_STRICT_STRUCTURE";

static POLICY_OVERRIDE: RwLock<Option<StructurePolicy>> = RwLock::new(None);

/// Treatment of features that end outside a terminal grammar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructurePolicy {
    /// Run the feature and keep its warning.
    #[default]
    Lenient,
    /// Reject the feature.
    Strict,
}

impl StructurePolicy {
    /// Policy for a boolean "strict" switch.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    /// Whether incomplete features are rejected.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Interpret an environment value.
    ///
    /// Accepts the policy names and the usual boolean words, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber::config::StructurePolicy;
    ///
    /// assert_eq!(StructurePolicy::from_env_value(" Strict "), Some(StructurePolicy::Strict));
    /// assert_eq!(StructurePolicy::from_env_value("off"), Some(StructurePolicy::Lenient));
    /// assert_eq!(StructurePolicy::from_env_value("sometimes"), None);
    /// ```
    #[must_use]
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "1" | "true" | "yes" | "on" => Some(Self::Strict),
            "lenient" | "0" | "false" | "no" | "off" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Accept or reject a parsed feature.
    ///
    /// # Errors
    ///
    /// Returns the structural warning when the policy is strict and the
    /// feature is incomplete.
    pub fn admit(self, parsed: ParsedFeature) -> Result<Feature, StructuralWarning> {
        match parsed.warning {
            Some(warning) if self.is_strict() => Err(warning),
            _ => Ok(parsed.feature),
        }
    }
}

fn resolve(overridden: Option<StructurePolicy>, env_value: Option<&str>) -> StructurePolicy {
    if let Some(policy) = overridden {
        return policy;
    }
    let Some(value) = env_value else {
        return StructurePolicy::default();
    };
    StructurePolicy::from_env_value(value).unwrap_or_else(|| {
        log::warn!("ignoring unrecognised {STRICT_STRUCTURE_ENV} value {value:?}");
        StructurePolicy::default()
    })
}

/// The policy currently in force.
#[must_use]
pub fn structure_policy() -> StructurePolicy {
    let overridden = *POLICY_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    resolve(
        overridden,
        std::env::var(STRICT_STRUCTURE_ENV).ok().as_deref(),
    )
}

/// Force `policy` for the rest of the process, ignoring the environment.
pub fn set_structure_policy(policy: StructurePolicy) {
    *POLICY_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(policy);
}

/// Whether incomplete features are currently rejected.
#[must_use]
pub fn strict_structure() -> bool {
    structure_policy().is_strict()
}

/// Shorthand for [`set_structure_policy`] with a boolean switch.
pub fn set_strict_structure(enabled: bool) {
    set_structure_policy(StructurePolicy::from_strict(enabled));
}

/// Drop the in-process override so the environment decides again.
pub fn clear_strict_structure_override() {
    *POLICY_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}
