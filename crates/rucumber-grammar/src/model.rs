//! Structured feature documents produced by the builder.
//!
//! A [`Feature`] owns its tags and scenarios; each [`Scenario`] owns its
//! steps. Only statuses change after building, when a runner records results.

use crate::StepKeyword;

/// Tri-state evaluation status shared by features and scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Not run yet.
    #[default]
    Unevaluated,
    /// Every constituent passed.
    Succeeded,
    /// At least one constituent failed.
    Failed,
}

impl Status {
    /// Map a boolean verdict onto a status.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Succeeded } else { Self::Failed }
    }

    /// Lowercase label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unevaluated => "unevaluated",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Whether the status records a pass.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A single step line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    keyword: StepKeyword,
    text: String,
    line: usize,
}

impl Step {
    /// Create a step with its resolved keyword, stripped text and line.
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>, line: usize) -> Self {
        Self {
            keyword,
            text: text.into(),
            line,
        }
    }

    /// `Given`, `When` or `Then`; conjunctions are already resolved.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Step text with the leading keyword stripped.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// One-based source line, or zero when built without line tracking.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

/// One executable test case within a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    description: String,
    steps: Vec<Step>,
    status: Status,
}

impl Scenario {
    /// Accumulated header text, one line per `\n`-terminated entry.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First header line with the `Scenario:` keyword removed.
    #[must_use]
    pub fn title(&self) -> &str {
        title_of(&self.description, "scenario:")
    }

    /// Steps in document order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Evaluation status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Record the evaluation status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn push_description(&mut self, line: &str) {
        self.description.push_str(line.trim_end());
        self.description.push('\n');
    }

    pub(crate) fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }
}

/// Top-level specification unit; one per feature file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    description: String,
    tags: Vec<String>,
    scenarios: Vec<Scenario>,
    status: Status,
}

impl Feature {
    /// Accumulated header text, one line per `\n`-terminated entry.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First header line with the `Feature:` keyword removed.
    #[must_use]
    pub fn title(&self) -> &str {
        title_of(&self.description, "feature:")
    }

    /// Tags without their `@` marker, in file order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the feature carries `tag` (given with or without `@`).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.strip_prefix('@').unwrap_or(tag);
        self.tags.iter().any(|t| t == tag)
    }

    /// Scenarios in document order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Mutable access for recording scenario statuses.
    pub fn scenarios_mut(&mut self) -> &mut [Scenario] {
        &mut self.scenarios
    }

    /// Evaluation status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Record the evaluation status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn push_description(&mut self, line: &str) {
        self.description.push_str(line.trim_end());
        self.description.push('\n');
    }

    pub(crate) fn push_tag(&mut self, tag: String) {
        self.tags.push(tag);
    }

    pub(crate) fn push_scenario(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    pub(crate) fn last_scenario_mut(&mut self) -> Option<&mut Scenario> {
        self.scenarios.last_mut()
    }

    pub(crate) fn pop_empty_scenario(&mut self) -> Option<Scenario> {
        if self.scenarios.last().is_some_and(|s| s.steps.is_empty()) {
            self.scenarios.pop()
        } else {
            None
        }
    }
}

fn title_of<'a>(description: &'a str, keyword: &str) -> &'a str {
    let first = description.lines().next().unwrap_or_default().trim();
    first
        .get(..keyword.len())
        .filter(|head| head.eq_ignore_ascii_case(keyword))
        .and_then(|_| first.get(keyword.len()..))
        .map_or(first, str::trim)
}
