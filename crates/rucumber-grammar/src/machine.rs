//! Finite state machine validating the line-to-line grammar of a feature.
//!
//! The machine starts in [`GrammarCategory::Start`] and moves according to
//! [`GrammarCategory::permitted`]. A file is well formed when the machine ends
//! in a terminal state.

use crate::category::GrammarCategory;
use crate::errors::GrammarViolation;

/// Tracks the grammar state while a feature is read line by line.
#[derive(Debug, Clone, Default)]
pub struct GrammarStateMachine {
    state: GrammarCategory,
}

impl GrammarStateMachine {
    /// Create a machine in the start state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine positioned at `state`.
    #[must_use]
    pub fn with_state(state: GrammarCategory) -> Self {
        Self { state }
    }

    /// Current grammar state.
    #[must_use]
    pub fn state(&self) -> GrammarCategory {
        self.state
    }

    /// Whether the machine currently sits in a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Return to the start state.
    pub fn reset(&mut self) {
        self.state = GrammarCategory::Start;
    }

    /// Classify `line` and move to the resulting state.
    ///
    /// On error the state is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarViolation`] when the line declares a category outside
    /// the permitted set, or declares nothing in a state that requires an
    /// explicit keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber_grammar::{GrammarCategory, GrammarStateMachine};
    ///
    /// let mut machine = GrammarStateMachine::new();
    /// assert_eq!(machine.advance("@smoke"), Ok(GrammarCategory::Tag));
    /// assert_eq!(machine.advance("Feature: login"), Ok(GrammarCategory::Feature));
    /// assert_eq!(machine.advance("  spanning more lines"), Ok(GrammarCategory::Feature));
    /// ```
    pub fn advance(&mut self, line: &str) -> Result<GrammarCategory, GrammarViolation> {
        let next = transition(self.state, line)?;
        if next != self.state {
            log::debug!("grammar transition {} -> {next}", self.state);
        }
        self.state = next;
        Ok(next)
    }
}

/// Compute the state that follows `current` after reading `line`.
///
/// Blank lines never change state.
///
/// # Errors
///
/// See [`GrammarStateMachine::advance`].
pub fn transition(
    current: GrammarCategory,
    line: &str,
) -> Result<GrammarCategory, GrammarViolation> {
    if line.trim().is_empty() {
        return Ok(current);
    }
    let permitted = current.permitted();
    match GrammarCategory::declared_by(line) {
        Some(found) if permitted.contains(&found) => Ok(found),
        Some(found) => Err(GrammarViolation::new(current, Some(found), line)),
        None if current.requires_explicit_match() => {
            Err(GrammarViolation::new(current, None, line))
        }
        None => Ok(current),
    }
}
