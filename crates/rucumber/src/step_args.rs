//! Arguments handed to a step handler.
//!
//! [`StepArgs`] carries the literal step text together with the capture
//! groups produced when the registered pattern matched it. Group `0` is the
//! matched prefix; explicit groups start at `1`. [`StepArgs::parse`] converts
//! a capture through [`FromStr`] and surfaces failures as
//! [`StepError::Argument`] so handlers can use `?`.

use std::fmt;
use std::str::FromStr;

use regex::Captures;

use crate::types::StepError;

/// Step text plus the captures of the pattern that matched it.
pub struct StepArgs<'t> {
    text: &'t str,
    captures: Option<Captures<'t>>,
}

impl<'t> StepArgs<'t> {
    pub(crate) fn new(text: &'t str, captures: Captures<'t>) -> Self {
        Self {
            text,
            captures: Some(captures),
        }
    }

    /// Arguments with no captures, useful when calling a handler directly.
    #[must_use]
    pub fn without_captures(text: &'t str) -> Self {
        Self {
            text,
            captures: None,
        }
    }

    /// The full step text, keyword already stripped.
    #[must_use]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Capture group `index`, if it participated in the match.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.captures
            .as_ref()?
            .get(index)
            .map(|capture| capture.as_str())
    }

    /// Named capture group, if it participated in the match.
    #[must_use]
    pub fn name(&self, name: &str) -> Option<&'t str> {
        self.captures
            .as_ref()?
            .name(name)
            .map(|capture| capture.as_str())
    }

    /// Number of explicit capture groups in the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.captures
            .as_ref()
            .map_or(0, |captures| captures.len().saturating_sub(1))
    }

    /// Whether the pattern declared no capture groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capture group `index`, or an [`StepError::Argument`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Argument`] if the group did not participate in
    /// the match.
    pub fn require(&self, index: usize) -> Result<&'t str, StepError> {
        self.get(index).ok_or_else(|| StepError::Argument {
            index,
            message: "capture group did not match".to_string(),
        })
    }

    /// Parse capture group `index` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Argument`] if the group is missing or its text
    /// does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber::{Step, StepContext, StepKeyword, StepRegistry, execute_step};
    ///
    /// let mut registry = StepRegistry::new();
    /// registry
    ///     .register(r"I have (\d+) cucumbers", |ctx, args| {
    ///         let count: u32 = args.parse(1)?;
    ///         ctx.insert("count", count);
    ///         Ok(())
    ///     })
    ///     .unwrap();
    ///
    /// let mut ctx = StepContext::new();
    /// let step = Step::new(StepKeyword::Given, "I have 12 cucumbers", 1);
    /// let report = execute_step(&registry, &mut ctx, &step);
    /// assert!(report.outcome.is_success());
    /// assert_eq!(ctx.get::<u32>("count"), Some(&12));
    /// ```
    pub fn parse<T>(&self, index: usize) -> Result<T, StepError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.require(index)?;
        raw.parse().map_err(|err| StepError::Argument {
            index,
            message: format!("failed to parse '{raw}': {err}"),
        })
    }
}

impl fmt::Debug for StepArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<_> = (1..=self.len()).map(|index| self.get(index)).collect();
        f.debug_struct("StepArgs")
            .field("text", &self.text)
            .field("groups", &groups)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn args_for<'t>(regex: &Regex, text: &'t str) -> StepArgs<'t> {
        let Some(captures) = regex.captures(text) else {
            panic!("{regex} should match {text:?}");
        };
        StepArgs::new(text, captures)
    }

    #[test]
    fn exposes_positional_and_named_groups() {
        let regex = Regex::new(r"^(?:I run \x22(?<cmd>[^\x22]+)\x22 (\d+) times)")
            .unwrap_or_else(|e| panic!("regex: {e}"));
        let args = args_for(&regex, "I run \"rucumber init\" 3 times");
        assert_eq!(args.len(), 2);
        assert_eq!(args.name("cmd"), Some("rucumber init"));
        assert_eq!(args.get(2), Some("3"));
        assert_eq!(args.parse::<u8>(2).ok(), Some(3));
    }

    #[test]
    fn parse_failure_reports_index_and_text() {
        let regex = Regex::new(r"^(?:(\w+) apples)").unwrap_or_else(|e| panic!("regex: {e}"));
        let args = args_for(&regex, "many apples");
        let Err(err) = args.parse::<u32>(1) else {
            panic!("'many' is not a number");
        };
        assert!(matches!(err, StepError::Argument { index: 1, .. }));
        assert!(err.to_string().contains("failed to parse 'many'"));
    }

    #[test]
    fn missing_group_is_an_argument_error() {
        let args = StepArgs::without_captures("plain text");
        assert!(args.is_empty());
        assert_eq!(args.text(), "plain text");
        assert!(matches!(
            args.require(1),
            Err(StepError::Argument { index: 1, .. })
        ));
    }
}
