//! Step registration and lookup.
//!
//! A [`StepRegistry`] is built explicitly for each run and handed to the
//! [`Runner`](crate::Runner). Patterns are kept in registration order and
//! [`StepRegistry::resolve`] returns the first one whose anchored regular
//! expression matches the step text. Registering a pattern a second time
//! replaces its handler in place.

use std::cell::Cell;
use std::fmt;

use hashbrown::HashMap;
use regex::Captures;

use crate::context::StepContext;
use crate::pattern::StepPattern;
use crate::step_args::StepArgs;
use crate::types::{StepHandler, StepResult};

/// Errors raised while registering steps.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The pattern is not a valid regular expression.
    #[error("invalid step pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as passed to [`StepRegistry::register`].
        pattern: String,
        /// Compilation failure.
        #[source]
        source: regex::Error,
    },
}

struct Registration {
    pattern: StepPattern,
    handler: StepHandler,
    used: Cell<bool>,
}

/// Ordered mapping from step patterns to handlers.
///
/// # Examples
///
/// ```
/// use rucumber::StepRegistry;
///
/// let mut registry = StepRegistry::new();
/// registry.register(r"^I am in a writable directory$", |_, _| Ok(())).unwrap();
///
/// assert!(registry.resolve("I am in a writable directory").is_some());
/// assert!(registry.resolve("I am somewhere else").is_none());
/// ```
#[derive(Default)]
pub struct StepRegistry {
    registrations: Vec<Registration>,
    by_pattern: HashMap<String, usize>,
}

/// A pattern that matched a step, with its handler and captures.
pub struct ResolvedStep<'r, 't> {
    pattern: &'r StepPattern,
    handler: &'r StepHandler,
    captures: Captures<'t>,
}

impl<'r, 't> ResolvedStep<'r, 't> {
    /// The matching pattern.
    #[must_use]
    pub fn pattern(&self) -> &'r StepPattern {
        self.pattern
    }

    /// The handler bound to the pattern.
    #[must_use]
    pub fn handler(&self) -> &'r StepHandler {
        self.handler
    }

    /// Split into the handler and the arguments it should receive.
    #[must_use]
    pub fn into_call(self, text: &'t str) -> (&'r StepHandler, StepArgs<'t>) {
        (self.handler, StepArgs::new(text, self.captures))
    }
}

impl StepRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `pattern` to `handler`.
    ///
    /// The pattern is a regular expression anchored at the start of the step
    /// text. Registering an existing pattern again replaces its handler and
    /// keeps its original position in the resolution order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] if `pattern` does not compile.
    pub fn register<F>(&mut self, pattern: &str, handler: F) -> Result<(), RegistryError>
    where
        F: Fn(&mut StepContext, &StepArgs<'_>) -> StepResult + 'static,
    {
        let compiled =
            StepPattern::compile(pattern).map_err(|source| RegistryError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        let handler: StepHandler = Box::new(handler);
        if let Some(registration) = self
            .by_pattern
            .get(pattern)
            .and_then(|&index| self.registrations.get_mut(index))
        {
            log::warn!("step pattern '{pattern}' registered twice; replacing its handler");
            registration.handler = handler;
            registration.used.set(false);
            return Ok(());
        }
        log::debug!("registered step pattern '{pattern}'");
        self.by_pattern
            .insert(pattern.to_string(), self.registrations.len());
        self.registrations.push(Registration {
            pattern: compiled,
            handler,
            used: Cell::new(false),
        });
        Ok(())
    }

    /// Find the first registered pattern matching `text`.
    ///
    /// Returns `None` when nothing matches. A successful resolution marks
    /// the pattern as used.
    #[must_use]
    pub fn resolve<'t>(&self, text: &'t str) -> Option<ResolvedStep<'_, 't>> {
        self.registrations.iter().find_map(|registration| {
            let captures = registration.pattern.captures(text)?;
            registration.used.set(true);
            log::debug!(
                "step '{text}' resolved to pattern '{}'",
                registration.pattern
            );
            Some(ResolvedStep {
                pattern: &registration.pattern,
                handler: &registration.handler,
                captures,
            })
        })
    }

    /// Whether `pattern` has been registered.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.by_pattern.contains_key(pattern)
    }

    /// Registered patterns in resolution order.
    pub fn patterns(&self) -> impl Iterator<Item = &StepPattern> {
        self.registrations
            .iter()
            .map(|registration| &registration.pattern)
    }

    /// Patterns that no step has resolved to yet, in resolution order.
    #[must_use]
    pub fn unused_patterns(&self) -> Vec<&str> {
        self.registrations
            .iter()
            .filter(|registration| !registration.used.get())
            .map(|registration| registration.pattern.as_str())
            .collect()
    }

    /// Forget which patterns have been used.
    pub fn reset_usage(&self) {
        for registration in &self.registrations {
            registration.used.set(false);
        }
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no pattern has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.registrations.iter().map(|r| r.pattern.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests;
