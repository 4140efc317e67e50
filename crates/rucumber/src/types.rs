//! Core types and error enums shared across the crate.
//!
//! The module defines the error a step handler may return, the outcome of a
//! single step execution, and the type aliases used by the registry and
//! runner.

use std::fmt;

use rucumber_grammar::Feature;

use crate::context::StepContext;
use crate::step_args::StepArgs;

pub use rucumber_grammar::StepKeyword;

/// Error returned (or produced from a panic) by a step handler or hook.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StepError {
    /// An expectation checked by the handler did not hold.
    #[error("assertion failed: {message}")]
    Assertion {
        /// Description of the failed expectation.
        message: String,
    },
    /// A capture group could not be read or converted.
    #[error("invalid argument {index}: {message}")]
    Argument {
        /// Capture group index.
        index: usize,
        /// Why the capture was rejected.
        message: String,
    },
    /// The handler panicked; the payload is rendered to text.
    #[error("step panicked: {message}")]
    Panic {
        /// Rendered panic payload.
        message: String,
    },
    /// Any other error raised by the handler.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl StepError {
    /// Build an [`StepError::Assertion`] from a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber::StepError;
    ///
    /// let err = StepError::assertion("expected 2 files");
    /// assert_eq!(err.to_string(), "assertion failed: expected 2 files");
    /// ```
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error.
    #[must_use]
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Whether the error came from a caught panic.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }
}

impl From<std::io::Error> for StepError {
    fn from(error: std::io::Error) -> Self {
        Self::other(error)
    }
}

/// Result type returned by step handlers and hooks.
pub type StepResult = Result<(), StepError>;

/// Boxed step handler stored in the registry.
pub type StepHandler = Box<dyn Fn(&mut StepContext, &StepArgs<'_>) -> StepResult>;

/// Boxed feature hook.
pub type FeatureHook = Box<dyn FnMut(&mut StepContext, &Feature) -> StepResult>;

/// Outcome of executing one step.
#[derive(Debug, Default)]
pub enum StepOutcome {
    /// No registered pattern matched the step text.
    #[default]
    Undefined,
    /// The handler returned normally.
    Succeeded,
    /// The handler returned an error or panicked.
    Failed(StepError),
}

impl StepOutcome {
    /// Whether the outcome counts as a pass. Undefined steps do not.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Whether no handler was found.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// The retained handler error, if the step failed.
    #[must_use]
    pub fn error(&self) -> Option<&StepError> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Undefined | Self::Succeeded => None,
        }
    }

    /// Uppercase label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed(_) => "FAILED",
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(error) => write!(f, "{}: {error}", self.label()),
            Self::Undefined | Self::Succeeded => f.write_str(self.label()),
        }
    }
}

impl From<StepResult> for StepOutcome {
    fn from(result: StepResult) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(error) => Self::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests;
