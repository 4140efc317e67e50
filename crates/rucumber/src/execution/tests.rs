//! Unit tests for the execution module.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::{fixture, rstest};
use rucumber_grammar::{StepKeyword, parse_feature};

use super::*;

const TRIPLE: &str = "Feature: f\n  Scenario: s\n    Given A\n    When B\n    Then C\n";

fn feature_from(source: &str) -> Feature {
    parse_feature(source)
        .unwrap_or_else(|e| panic!("valid feature: {e}"))
        .feature
}

fn outcomes(report: &ScenarioReport) -> Vec<&'static str> {
    report.steps.iter().map(|s| s.outcome.label()).collect()
}

#[fixture]
fn abc_registry() -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry
        .register("^A$", |ctx, _| {
            ctx.insert("a", true);
            Ok(())
        })
        .unwrap_or_else(|e| panic!("register A: {e}"));
    registry
        .register("^B$", |_, _| Err(StepError::assertion("B is broken")))
        .unwrap_or_else(|e| panic!("register B: {e}"));
    registry
        .register("^C$", |ctx, _| {
            if ctx.get::<bool>("a").copied().unwrap_or(false) {
                Ok(())
            } else {
                Err(StepError::assertion("A did not run"))
            }
        })
        .unwrap_or_else(|e| panic!("register C: {e}"));
    registry
}

#[rstest]
fn failing_step_does_not_stop_the_scenario(abc_registry: StepRegistry) {
    let mut feature = feature_from(TRIPLE);
    let mut runner = Runner::new(abc_registry);
    let report = runner.run_feature(&mut feature);

    let Some(scenario) = report.scenarios.first() else {
        panic!("one scenario expected");
    };
    assert_eq!(outcomes(scenario), ["SUCCEEDED", "FAILED", "SUCCEEDED"]);
    assert_eq!(scenario.status, Status::Failed);
    assert_eq!(report.status, Status::Failed);
    assert_eq!(feature.status(), Status::Failed);
    assert_eq!(
        feature.scenarios().first().map(Scenario::status),
        Some(Status::Failed)
    );
}

#[rstest]
fn failure_keeps_the_underlying_error(abc_registry: StepRegistry) {
    let mut feature = feature_from(TRIPLE);
    let report = Runner::new(abc_registry).run_feature(&mut feature);
    let Some(failed) = report
        .scenarios
        .iter()
        .flat_map(|s| &s.steps)
        .find_map(|step| step.outcome.error())
    else {
        panic!("step B should carry its error");
    };
    assert_eq!(failed.to_string(), "assertion failed: B is broken");
}

#[test]
fn undefined_step_is_reported_and_execution_continues() {
    let mut registry = StepRegistry::new();
    registry
        .register("^C$", |_, _| Ok(()))
        .unwrap_or_else(|e| panic!("register C: {e}"));
    let mut feature = feature_from(TRIPLE);
    let report = Runner::new(registry).run_feature(&mut feature);
    let Some(scenario) = report.scenarios.first() else {
        panic!("one scenario expected");
    };
    assert_eq!(outcomes(scenario), ["UNDEFINED", "UNDEFINED", "SUCCEEDED"]);
    assert_eq!(scenario.status, Status::Failed);
    let patterns: Vec<_> = scenario.steps.iter().map(|s| s.pattern.as_deref()).collect();
    assert_eq!(patterns, [None, None, Some("^C$")]);
}

#[test]
fn panicking_handler_becomes_failed_outcome() {
    let mut registry = StepRegistry::new();
    registry
        .register("boom", |_, _| panic!("kaboom"))
        .unwrap_or_else(|e| panic!("register: {e}"));
    let mut ctx = StepContext::new();
    let step = Step::new(StepKeyword::When, "boom goes the step", 4);
    let report = execute_step(&registry, &mut ctx, &step);
    let Some(error) = report.outcome.error() else {
        panic!("panic should become a failure");
    };
    assert!(error.is_panic());
    assert_eq!(error.to_string(), "step panicked: kaboom");
    assert_eq!(report.keyword, StepKeyword::When);
}

#[test]
fn context_is_shared_across_scenarios_and_features() {
    let mut registry = StepRegistry::new();
    registry
        .register("^count$", |ctx, _| {
            let next = ctx.get::<u32>("count").copied().unwrap_or(0) + 1;
            ctx.insert("count", next);
            Ok(())
        })
        .unwrap_or_else(|e| panic!("register: {e}"));
    let source = "Feature: f\n Scenario: one\n  Given count\n  Then count\n Scenario: two\n  Given count\n  Then count\n";
    let mut features = [feature_from(source), feature_from(source)];
    let mut runner = Runner::new(registry);
    let report = runner.run_features(&mut features);
    assert!(report.is_success());
    assert_eq!(runner.context().get::<u32>("count"), Some(&8));
}

#[derive(Default)]
struct HookLog(Rc<RefCell<Vec<String>>>);

impl HookLog {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn share(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

fn logging_registry(log: &HookLog) -> StepRegistry {
    let mut registry = StepRegistry::new();
    let step_log = log.share();
    registry
        .register(".*", move |_, args| {
            step_log.push(format!("step {}", args.text()));
            Ok(())
        })
        .unwrap_or_else(|e| panic!("register: {e}"));
    registry
}

#[test]
fn hooks_wrap_each_feature_and_see_its_tags() {
    let log = HookLog::default();
    let before_log = log.share();
    let after_log = log.share();
    let hooks = Hooks::new()
        .before_feature(move |_, feature| {
            before_log.push(format!("before init_cleanup={}", feature.has_tag("init_cleanup")));
            Ok(())
        })
        .after_feature(move |_, feature| {
            after_log.push(format!("after {}", feature.title()));
            Ok(())
        });
    let mut feature = feature_from(
        "@init_cleanup\nFeature: lifecycle\n Scenario: s\n  Given one\n  Then two\n",
    );
    let report = Runner::new(logging_registry(&log))
        .with_hooks(hooks)
        .run_feature(&mut feature);
    assert_eq!(report.status, Status::Succeeded);
    assert_eq!(report.tags, ["init_cleanup"]);
    assert_eq!(
        log.entries(),
        ["before init_cleanup=true", "step one", "step two", "after lifecycle"]
    );
}

#[test]
fn failing_before_hook_skips_scenarios_but_runs_after_hook() {
    let log = HookLog::default();
    let after_log = log.share();
    let hooks = Hooks::new()
        .before_feature(|_, _| Err(StepError::assertion("no workspace")))
        .after_feature(move |_, _| {
            after_log.push("after");
            Ok(())
        });
    let mut feature = feature_from(TRIPLE);
    let report = Runner::new(logging_registry(&log))
        .with_hooks(hooks)
        .run_feature(&mut feature);

    assert!(report.scenarios.is_empty());
    assert_eq!(report.status, Status::Failed);
    assert_eq!(log.entries(), ["after"]);
    let [hook_error] = report.hook_errors.as_slice() else {
        panic!("exactly one hook error expected");
    };
    assert_eq!(hook_error.kind, HookKind::BeforeFeature);
    assert_eq!(
        hook_error.to_string(),
        "before_feature hook failed: assertion failed: no workspace"
    );
    assert_eq!(
        feature.scenarios().first().map(Scenario::status),
        Some(Status::Unevaluated)
    );
}

#[test]
fn failing_after_hook_fails_an_otherwise_green_feature() {
    let log = HookLog::default();
    let hooks = Hooks::new().after_feature(|_, _| panic!("cleanup exploded"));
    let mut feature = feature_from(TRIPLE);
    let report = Runner::new(logging_registry(&log))
        .with_hooks(hooks)
        .run_feature(&mut feature);
    assert!(report.scenarios.iter().all(|s| s.status.is_success()));
    assert_eq!(report.status, Status::Failed);
    assert!(matches!(
        report.hook_errors.as_slice(),
        [HookError {
            kind: HookKind::AfterFeature,
            source: StepError::Panic { .. },
        }]
    ));
}

#[test]
fn feature_without_scenarios_succeeds() {
    let mut feature = feature_from("Feature: empty\n");
    let report = Runner::default().run_feature(&mut feature);
    assert_eq!(report.status, Status::Succeeded);
    assert!(report.scenarios.is_empty());
}
