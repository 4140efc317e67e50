//! Parse entry points tying the state machine to the builder.

use std::path::Path;

use crate::builder::FeatureBuilder;
use crate::errors::{GrammarViolation, ParseError, StructuralWarning};
use crate::machine::GrammarStateMachine;
use crate::model::Feature;

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeature {
    /// The assembled feature.
    pub feature: Feature,
    /// Set when the source did not end in a terminal grammar state.
    pub warning: Option<StructuralWarning>,
}

impl ParsedFeature {
    /// Whether the source ended in a terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warning.is_none()
    }
}

/// Whether a line is skipped before classification.
///
/// Blank lines and `#` comments never reach the state machine.
#[must_use]
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse feature text.
///
/// # Errors
///
/// Returns the first [`GrammarViolation`], annotated with its line number.
///
/// # Examples
///
/// ```
/// use rucumber_grammar::parse_feature;
///
/// let parsed = parse_feature(
///     "Feature: arithmetic\n  Scenario: add\n    Given 1\n    When adding 1\n    Then 2\n",
/// )
/// .unwrap();
/// assert!(parsed.is_complete());
/// assert_eq!(parsed.feature.scenarios().len(), 1);
/// ```
pub fn parse_feature(source: &str) -> Result<ParsedFeature, GrammarViolation> {
    let parsed = parse_source(source)?;
    log_warning(&parsed);
    Ok(parsed)
}

/// Read and parse a feature file.
///
/// The file is read fully and closed before parsing starts. A structural
/// warning carries the file path.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be read and
/// [`ParseError::Grammar`] when a line breaks the grammar.
pub fn parse_feature_file(path: &Path) -> Result<ParsedFeature, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("parsing feature file {}", path.display());
    let mut parsed = parse_source(&source).map_err(|source| ParseError::Grammar {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(warning) = parsed.warning.as_mut() {
        warning.path = Some(path.to_path_buf());
    }
    log_warning(&parsed);
    Ok(parsed)
}

fn parse_source(source: &str) -> Result<ParsedFeature, GrammarViolation> {
    let mut machine = GrammarStateMachine::new();
    let mut builder = FeatureBuilder::new();
    for (index, line) in source.lines().enumerate() {
        if is_ignorable(line) {
            continue;
        }
        let line_number = index + 1;
        let category = machine
            .advance(line)
            .map_err(|violation| violation.at_line(line_number))?;
        builder.push(category, line, line_number);
    }

    let warning = (!machine.is_terminal()).then(|| StructuralWarning {
        final_state: machine.state(),
        path: None,
    });
    Ok(ParsedFeature {
        feature: builder.finish(),
        warning,
    })
}

fn log_warning(parsed: &ParsedFeature) {
    if let Some(warning) = &parsed.warning {
        log::warn!("{warning}");
    }
}
