//! Runtime execution of parsed features.
//!
//! [`Runner`] drives features to completion against a [`StepRegistry`], a
//! shared [`StepContext`] and optional [`Hooks`]. Everything runs on the
//! calling thread, one feature, scenario and step at a time in document
//! order.
//!
//! Failures stay local. A step that has no matching pattern is recorded as
//! [`StepOutcome::Undefined`]; a handler that returns an error or panics is
//! recorded as [`StepOutcome::Failed`] with the error retained. Either way
//! the remaining steps of the scenario still run.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use rucumber_grammar::{Feature, Scenario, Status, Step};

use crate::context::StepContext;
use crate::hooks::{HookError, HookKind, Hooks};
use crate::loader::{feature_paths, load_feature};
use crate::panic_support::panic_message;
use crate::registry::StepRegistry;
use crate::reporting::{FeatureReport, RunReport, ScenarioReport, StepReport};
use crate::types::{StepError, StepOutcome, StepResult};

/// Run `f`, converting a panic into [`StepError::Panic`].
fn guarded(f: impl FnOnce() -> StepResult) -> StepResult {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(StepError::Panic {
            message: panic_message(payload.as_ref()),
        })
    })
}

/// Resolve and run a single step.
///
/// Never fails: an unmatched step yields [`StepOutcome::Undefined`] and a
/// failing handler yields [`StepOutcome::Failed`].
///
/// # Examples
///
/// ```
/// use rucumber::{Step, StepContext, StepKeyword, StepRegistry, execute_step};
///
/// let registry = StepRegistry::new();
/// let mut ctx = StepContext::new();
/// let step = Step::new(StepKeyword::Given, "nothing is registered", 1);
///
/// let report = execute_step(&registry, &mut ctx, &step);
/// assert!(report.outcome.is_undefined());
/// assert_eq!(report.pattern, None);
/// ```
pub fn execute_step(registry: &StepRegistry, ctx: &mut StepContext, step: &Step) -> StepReport {
    let text = step.text();
    let Some(resolved) = registry.resolve(text) else {
        log::warn!("undefined step at line {}: {} {text}", step.line(), step.keyword());
        return StepReport {
            text: text.to_string(),
            keyword: step.keyword(),
            pattern: None,
            outcome: StepOutcome::Undefined,
        };
    };
    let pattern = resolved.pattern().as_str().to_string();
    let (handler, args) = resolved.into_call(text);
    let outcome = StepOutcome::from(guarded(|| handler(ctx, &args)));
    if let Some(error) = outcome.error() {
        log::error!(
            "step failed at line {}: {} {text}: {error}",
            step.line(),
            step.keyword()
        );
    }
    StepReport {
        text: text.to_string(),
        keyword: step.keyword(),
        pattern: Some(pattern),
        outcome,
    }
}

/// Drives features against a registry, a shared context and hooks.
///
/// The context is shared by every step and hook of the run and is never
/// reset between scenarios or features.
///
/// # Examples
///
/// ```
/// use rucumber::{Runner, Status, StepRegistry, parse_feature};
///
/// let mut registry = StepRegistry::new();
/// registry.register("^a passing step$", |_, _| Ok(())).unwrap();
///
/// let mut feature = parse_feature(
///     "Feature: demo\n  Scenario: one\n    Given a passing step\n    Then a passing step\n",
/// )
/// .unwrap()
/// .feature;
///
/// let mut runner = Runner::new(registry);
/// let report = runner.run_feature(&mut feature);
/// assert_eq!(report.status, Status::Succeeded);
/// assert_eq!(feature.status(), Status::Succeeded);
/// ```
#[derive(Debug, Default)]
pub struct Runner {
    registry: StepRegistry,
    hooks: Hooks,
    context: StepContext,
}

impl Runner {
    /// Create a runner with no hooks and an empty context.
    #[must_use]
    pub fn new(registry: StepRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Use `hooks` around every feature.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Start from a pre-populated context.
    #[must_use]
    pub fn with_context(mut self, context: StepContext) -> Self {
        self.context = context;
        self
    }

    /// The registry steps are resolved against.
    #[must_use]
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> &StepContext {
        &self.context
    }

    /// Mutable access to the shared context.
    pub fn context_mut(&mut self) -> &mut StepContext {
        &mut self.context
    }

    /// Consume the runner, keeping the context.
    #[must_use]
    pub fn into_context(self) -> StepContext {
        self.context
    }

    /// Run every step of `scenario` and record its status.
    pub fn run_scenario(&mut self, scenario: &mut Scenario) -> ScenarioReport {
        let steps: Vec<_> = scenario
            .steps()
            .iter()
            .map(|step| execute_step(&self.registry, &mut self.context, step))
            .collect();
        let status = Status::from_success(steps.iter().all(|step| step.outcome.is_success()));
        scenario.set_status(status);
        log::info!("scenario {:?}: {}", scenario.title(), status.label());
        ScenarioReport {
            title: scenario.title().to_string(),
            steps,
            status,
        }
    }

    /// Run `feature` with its hooks and record its status.
    ///
    /// When `before_feature` fails the scenarios are not run, the feature is
    /// failed and `after_feature` still runs.
    pub fn run_feature(&mut self, feature: &mut Feature) -> FeatureReport {
        log::info!("running feature {:?}", feature.title());
        let mut hook_errors = Vec::new();
        let mut scenarios = Vec::new();
        match self.run_hook(HookKind::BeforeFeature, feature) {
            Ok(()) => {
                for scenario in feature.scenarios_mut() {
                    scenarios.push(self.run_scenario(scenario));
                }
            }
            Err(err) => {
                log::warn!(
                    "skipping {} scenario(s) of {:?}",
                    feature.scenarios().len(),
                    feature.title()
                );
                hook_errors.push(err);
            }
        }
        if let Err(err) = self.run_hook(HookKind::AfterFeature, feature) {
            hook_errors.push(err);
        }

        let passed = hook_errors.is_empty()
            && scenarios
                .iter()
                .all(|scenario: &ScenarioReport| scenario.status.is_success());
        let status = Status::from_success(passed);
        feature.set_status(status);
        log::info!("feature {:?}: {}", feature.title(), status.label());
        FeatureReport {
            title: feature.title().to_string(),
            tags: feature.tags().to_vec(),
            scenarios,
            status,
            hook_errors,
        }
    }

    /// Run features in order.
    pub fn run_features(&mut self, features: &mut [Feature]) -> RunReport {
        RunReport {
            features: features
                .iter_mut()
                .map(|feature| self.run_feature(feature))
                .collect(),
            load_errors: Vec::new(),
        }
    }

    /// Load and run feature files in order.
    ///
    /// A file that fails to load is recorded in
    /// [`RunReport::load_errors`] and the remaining files still run.
    pub fn run_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> RunReport {
        let mut report = RunReport::default();
        for path in paths {
            match load_feature(path.as_ref()) {
                Ok(mut feature) => report.features.push(self.run_feature(&mut feature)),
                Err(err) => {
                    log::error!("{err}");
                    report.load_errors.push(err);
                }
            }
        }
        report
    }

    /// Load and run every `*.feature` file in `dir`, in sorted order.
    pub fn run_dir(&mut self, dir: &Path) -> RunReport {
        match feature_paths(dir) {
            Ok(paths) => self.run_files(&paths),
            Err(err) => {
                log::error!("{err}");
                RunReport {
                    features: Vec::new(),
                    load_errors: vec![err],
                }
            }
        }
    }

    fn run_hook(&mut self, kind: HookKind, feature: &Feature) -> Result<(), HookError> {
        let Some(hook) = self.hooks.hook_mut(kind) else {
            return Ok(());
        };
        log::debug!("running {kind} hook for {:?}", feature.title());
        let context = &mut self.context;
        guarded(|| hook(context, feature)).map_err(|source| {
            log::error!("{kind} hook failed for {:?}: {source}", feature.title());
            HookError { kind, source }
        })
    }
}

#[cfg(test)]
mod tests;
