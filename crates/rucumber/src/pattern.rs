//! Step pattern handling and compilation.
//! This module defines `StepPattern`, the source text of a registered pattern
//! together with its compiled regular expression.

use regex::{Captures, Regex};
use std::hash::{Hash, Hasher};

/// Regular expression used to match step text at runtime.
///
/// Matching is anchored at the start of the step text only; a pattern must
/// end in `$` to reject trailing text.
#[derive(Debug, Clone)]
pub struct StepPattern {
    text: String,
    regex: Regex,
}

// Equality and hashing use the source text so a pattern can be looked up by
// the string it was registered with.
impl PartialEq for StepPattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for StepPattern {}

impl Hash for StepPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl StepPattern {
    /// Compile `text` into a regular expression matched at the start of step
    /// text.
    ///
    /// The source is compiled unchanged, so inline flags and `(?x)` comments
    /// behave as written; anchoring is applied when matching.
    ///
    /// # Errors
    /// Returns the underlying [`regex::Error`] when `text` is not a valid
    /// regular expression.
    ///
    /// # Examples
    /// ```
    /// use rucumber::StepPattern;
    ///
    /// let pattern = StepPattern::compile("I am in").unwrap();
    /// assert!(pattern.is_match("I am in a writable directory"));
    /// assert!(!pattern.is_match("Now I am in a directory"));
    /// ```
    pub fn compile(text: impl Into<String>) -> Result<Self, regex::Error> {
        let text = text.into();
        let regex = Regex::new(&text)?;
        Ok(Self { text, regex })
    }

    /// Access the pattern as it was registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The compiled expression, without the start anchor.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern matches a prefix of `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }

    /// Capture groups for `text`, if the pattern matches.
    ///
    /// The leftmost match is taken, so a match exists at the start exactly
    /// when the leftmost one begins there.
    #[must_use]
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex
            .captures(text)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0))
    }
}

impl std::fmt::Display for StepPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
