//! Unit tests for step registration and resolution.

use super::*;
use crate::types::StepError;
use rstest::{fixture, rstest};

fn noop(_: &mut StepContext, _: &StepArgs<'_>) -> StepResult {
    Ok(())
}

fn mark(name: &'static str) -> impl Fn(&mut StepContext, &StepArgs<'_>) -> StepResult {
    move |ctx: &mut StepContext, _: &StepArgs<'_>| {
        ctx.insert("hit", name);
        Ok(())
    }
}

fn call(registry: &StepRegistry, text: &str) -> Option<&'static str> {
    let resolved = registry.resolve(text)?;
    let (handler, args) = resolved.into_call(text);
    let mut ctx = StepContext::new();
    handler(&mut ctx, &args).unwrap_or_else(|e| panic!("handler failed: {e}"));
    ctx.get::<&'static str>("hit").copied()
}

#[fixture]
fn overlapping() -> StepRegistry {
    let mut registry = StepRegistry::new();
    for (pattern, name) in [
        ("I run", "generic"),
        (r#"I run "rucumber init"$"#, "specific"),
    ] {
        registry
            .register(pattern, mark(name))
            .unwrap_or_else(|e| panic!("register {pattern}: {e}"));
    }
    registry
}

#[rstest]
fn first_registered_match_wins(overlapping: StepRegistry) {
    assert_eq!(call(&overlapping, r#"I run "rucumber init""#), Some("generic"));
}

#[rstest]
fn unmatched_text_resolves_to_none(overlapping: StepRegistry) {
    assert!(overlapping.resolve("Nothing matches this").is_none());
    assert!(overlapping.resolve("").is_none());
}

#[rstest]
fn overwrite_keeps_position_and_replaces_handler(mut overlapping: StepRegistry) {
    overlapping
        .register("I run", mark("replacement"))
        .unwrap_or_else(|e| panic!("re-register: {e}"));
    assert_eq!(overlapping.len(), 2);
    let patterns: Vec<_> = overlapping.patterns().map(StepPattern::as_str).collect();
    assert_eq!(patterns, ["I run", r#"I run "rucumber init"$"#]);
    assert_eq!(call(&overlapping, "I run anything"), Some("replacement"));
}

#[test]
fn invalid_pattern_is_reported() {
    let mut registry = StepRegistry::new();
    let Err(err) = registry.register("bad (", noop) else {
        panic!("unbalanced group must fail");
    };
    let RegistryError::InvalidPattern { pattern, .. } = &err;
    assert_eq!(pattern, "bad (");
    assert!(err.to_string().starts_with("invalid step pattern 'bad ('"));
    assert!(registry.is_empty());
}

#[rstest]
fn usage_is_tracked_per_pattern(overlapping: StepRegistry) {
    assert_eq!(overlapping.unused_patterns().len(), 2);
    let _ = overlapping.resolve("I run tests");
    assert_eq!(overlapping.unused_patterns(), [r#"I run "rucumber init"$"#]);
    overlapping.reset_usage();
    assert_eq!(overlapping.unused_patterns().len(), 2);
}

#[test]
fn captures_reach_the_handler() {
    let mut registry = StepRegistry::new();
    registry
        .register(r"(\d+) plus (\d+) is (\d+)$", |_, args| {
            let a: u32 = args.parse(1)?;
            let b: u32 = args.parse(2)?;
            let sum: u32 = args.parse(3)?;
            if a + b == sum {
                Ok(())
            } else {
                Err(StepError::assertion(format!("{a} + {b} != {sum}")))
            }
        })
        .unwrap_or_else(|e| panic!("register: {e}"));
    let text = "2 plus 2 is 5";
    let Some(resolved) = registry.resolve(text) else {
        panic!("pattern should match");
    };
    assert_eq!(resolved.pattern().as_str(), r"(\d+) plus (\d+) is (\d+)$");
    let (handler, args) = resolved.into_call(text);
    let Err(err) = handler(&mut StepContext::new(), &args) else {
        panic!("2 + 2 is not 5");
    };
    assert_eq!(err.to_string(), "assertion failed: 2 + 2 != 5");
}

#[test]
fn debug_lists_patterns() {
    let mut registry = StepRegistry::new();
    registry
        .register("a", noop)
        .unwrap_or_else(|e| panic!("register: {e}"));
    assert!(registry.contains("a"));
    assert_eq!(format!("{registry:?}"), r#"["a"]"#);
}
