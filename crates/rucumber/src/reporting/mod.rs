//! Execution reports.
//!
//! The runner returns one [`FeatureReport`] per feature, each holding a
//! [`ScenarioReport`] per scenario and a [`StepReport`] per step. A
//! [`RunReport`] gathers the feature reports of a whole run together with
//! the files that failed to load, and [`RunSummary`] condenses it into
//! counts.

use std::fmt;

use rucumber_grammar::{Status, StepKeyword};

use crate::hooks::HookError;
use crate::loader::LoadError;
use crate::types::StepOutcome;

/// Result of one step.
#[derive(Debug)]
pub struct StepReport {
    /// Step text, keyword stripped.
    pub text: String,
    /// Resolved keyword.
    pub keyword: StepKeyword,
    /// Pattern the step resolved to, if any.
    pub pattern: Option<String>,
    /// What happened.
    pub outcome: StepOutcome,
}

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioReport {
    /// Scenario title.
    pub title: String,
    /// Step results in document order.
    pub steps: Vec<StepReport>,
    /// `Succeeded` only if every step succeeded.
    pub status: Status,
}

impl ScenarioReport {
    /// Steps that did not succeed.
    pub fn failing_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|step| !step.outcome.is_success())
    }
}

/// Result of one feature.
#[derive(Debug)]
pub struct FeatureReport {
    /// Feature title.
    pub title: String,
    /// Feature tags.
    pub tags: Vec<String>,
    /// Scenario results in document order. Empty when `before_feature`
    /// failed.
    pub scenarios: Vec<ScenarioReport>,
    /// `Succeeded` only if every scenario and both hooks succeeded.
    pub status: Status,
    /// Hook failures, in the order they happened.
    pub hook_errors: Vec<HookError>,
}

/// Result of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// One report per feature that was run.
    pub features: Vec<FeatureReport>,
    /// Files that could not be loaded.
    pub load_errors: Vec<LoadError>,
}

impl RunReport {
    /// Count the outcomes.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::from_features(&self.features);
        summary.load_errors = self.load_errors.len();
        summary
    }

    /// Whether every feature succeeded and every file loaded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.load_errors.is_empty()
            && self
                .features
                .iter()
                .all(|feature| feature.status.is_success())
    }
}

/// Outcome counts for a run.
///
/// # Examples
///
/// ```
/// use rucumber::RunSummary;
///
/// let summary = RunSummary {
///     features_passed: 1,
///     scenarios_passed: 2,
///     steps_succeeded: 6,
///     ..RunSummary::default()
/// };
/// assert_eq!(
///     summary.to_string(),
///     "1 feature (1 passed, 0 failed)\n\
///      2 scenarios (2 passed, 0 failed)\n\
///      6 steps (6 succeeded, 0 failed, 0 undefined)"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Features whose status is `Succeeded`.
    pub features_passed: usize,
    /// Features whose status is `Failed`.
    pub features_failed: usize,
    /// Scenarios whose status is `Succeeded`.
    pub scenarios_passed: usize,
    /// Scenarios whose status is `Failed`.
    pub scenarios_failed: usize,
    /// Steps that succeeded.
    pub steps_succeeded: usize,
    /// Steps whose handler failed.
    pub steps_failed: usize,
    /// Steps without a matching pattern.
    pub steps_undefined: usize,
    /// Feature files that could not be loaded.
    pub load_errors: usize,
}

impl RunSummary {
    /// Count the outcomes in `features`.
    #[must_use]
    pub fn from_features(features: &[FeatureReport]) -> Self {
        let mut summary = Self::default();
        for feature in features {
            summary.add_feature(feature);
        }
        summary
    }

    fn add_feature(&mut self, feature: &FeatureReport) {
        bump(
            feature.status,
            &mut self.features_passed,
            &mut self.features_failed,
        );
        for scenario in &feature.scenarios {
            bump(
                scenario.status,
                &mut self.scenarios_passed,
                &mut self.scenarios_failed,
            );
            for step in &scenario.steps {
                match step.outcome {
                    StepOutcome::Succeeded => self.steps_succeeded += 1,
                    StepOutcome::Failed(_) => self.steps_failed += 1,
                    StepOutcome::Undefined => self.steps_undefined += 1,
                }
            }
        }
    }

    /// Total number of features counted.
    #[must_use]
    pub fn features(&self) -> usize {
        self.features_passed + self.features_failed
    }

    /// Total number of scenarios counted.
    #[must_use]
    pub fn scenarios(&self) -> usize {
        self.scenarios_passed + self.scenarios_failed
    }

    /// Total number of steps counted.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps_succeeded + self.steps_failed + self.steps_undefined
    }

    /// Whether nothing failed, was undefined, or failed to load.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.features_failed == 0
            && self.scenarios_failed == 0
            && self.steps_failed == 0
            && self.steps_undefined == 0
            && self.load_errors == 0
    }
}

fn bump(status: Status, passed: &mut usize, failed: &mut usize) {
    match status {
        Status::Succeeded => *passed += 1,
        Status::Failed => *failed += 1,
        Status::Unevaluated => {}
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} passed, {} failed)",
            plural(self.features(), "feature"),
            self.features_passed,
            self.features_failed
        )?;
        writeln!(
            f,
            "{} ({} passed, {} failed)",
            plural(self.scenarios(), "scenario"),
            self.scenarios_passed,
            self.scenarios_failed
        )?;
        write!(
            f,
            "{} ({} succeeded, {} failed, {} undefined)",
            plural(self.steps(), "step"),
            self.steps_succeeded,
            self.steps_failed,
            self.steps_undefined
        )?;
        if self.load_errors > 0 {
            write!(f, "\n{} could not be loaded", plural(self.load_errors, "file"))?;
        }
        Ok(())
    }
}
