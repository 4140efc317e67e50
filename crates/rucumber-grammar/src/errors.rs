//! Errors and warnings produced while parsing feature files.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::category::{GrammarCategory, TERMINAL_CATEGORIES, join};

/// A line whose category cannot legally follow the current grammar state.
///
/// # Examples
/// ```
/// use rucumber_grammar::{GrammarCategory, GrammarStateMachine};
///
/// let mut machine = GrammarStateMachine::with_state(GrammarCategory::Scenario);
/// let Err(violation) = machine.advance("When should not be here") else {
///     panic!("expected a violation");
/// };
/// assert_eq!(violation.state, GrammarCategory::Scenario);
/// assert_eq!(violation.found, Some(GrammarCategory::When));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarViolation {
    /// State of the machine when the line was read.
    pub state: GrammarCategory,
    /// Categories the line was allowed to declare.
    pub permitted: &'static [GrammarCategory],
    /// Category the line declared, if it declared one.
    pub found: Option<GrammarCategory>,
    /// The offending line, trimmed.
    pub line: String,
    /// One-based line number within the source, when known.
    pub line_number: Option<usize>,
}

impl GrammarViolation {
    pub(crate) fn new(state: GrammarCategory, found: Option<GrammarCategory>, line: &str) -> Self {
        Self {
            state,
            permitted: state.permitted(),
            found,
            line: line.trim().to_string(),
            line_number: None,
        }
    }

    /// Attach the one-based source line number.
    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for GrammarViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(number) = self.line_number {
            write!(f, "line {number}: ")?;
        }
        match self.found {
            Some(found) => write!(
                f,
                "after {} the line may declare one of [{}], but it declares {found}: {:?}",
                self.state,
                join(self.permitted),
                self.line
            ),
            None => write!(
                f,
                "after {} the line must start with one of [{}]: {:?}",
                self.state,
                join(self.permitted),
                self.line
            ),
        }
    }
}

impl std::error::Error for GrammarViolation {}

/// A feature that parsed to completion without reaching a terminal state.
///
/// This is a warning: the feature is still returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralWarning {
    /// State of the machine after the last line.
    pub final_state: GrammarCategory,
    /// Source file, when the feature was read from disk.
    pub path: Option<PathBuf>,
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "feature file {} ", path.display())?,
            None => f.write_str("feature ")?,
        }
        write!(
            f,
            "ends in state {}, expected one of [{}]",
            self.final_state,
            join(TERMINAL_CATEGORIES)
        )
    }
}

impl std::error::Error for StructuralWarning {}

/// Errors surfaced while parsing a feature file from disk.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read feature file {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line broke the grammar.
    #[error("invalid feature file {}: {source}", .path.display())]
    Grammar {
        /// File containing the offending line.
        path: PathBuf,
        /// The violation itself.
        #[source]
        source: GrammarViolation,
    },
}

impl ParseError {
    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Grammar { path, .. } => path,
        }
    }

    /// The grammar violation, when the file was readable.
    #[must_use]
    pub fn violation(&self) -> Option<&GrammarViolation> {
        match self {
            Self::Grammar { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unexpected_category() {
        let violation =
            GrammarViolation::new(GrammarCategory::Feature, Some(GrammarCategory::Tag), "@again ");
        assert_eq!(
            violation.to_string(),
            "after feature the line may declare one of [feature, scenario], but it declares tag: \"@again\""
        );
    }

    #[test]
    fn formats_missing_keyword_with_line_number() {
        let violation = GrammarViolation::new(GrammarCategory::Tag, None, "prose").at_line(3);
        assert_eq!(
            violation.to_string(),
            "line 3: after tag the line must start with one of [tag, feature]: \"prose\""
        );
    }

    #[test]
    fn formats_structural_warning_with_path() {
        let warning = StructuralWarning {
            final_state: GrammarCategory::Scenario,
            path: Some(PathBuf::from("features/all.feature")),
        };
        assert_eq!(
            warning.to_string(),
            "feature file features/all.feature ends in state scenario, expected one of [then]"
        );
    }

    #[test]
    fn parse_error_exposes_violation_and_path() {
        let err = ParseError::Grammar {
            path: PathBuf::from("x.feature"),
            source: GrammarViolation::new(GrammarCategory::Start, None, "oops"),
        };
        assert_eq!(err.path(), std::path::Path::new("x.feature"));
        assert!(err.violation().is_some());
        assert!(err.to_string().starts_with("invalid feature file x.feature: "));
    }
}
