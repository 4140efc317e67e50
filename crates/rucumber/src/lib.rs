//! Step registry and execution engine for rucumber.
//!
//! Feature files are parsed by [`rucumber_grammar`]; this crate binds their
//! steps to handlers and runs them. Build a [`StepRegistry`], optionally
//! configure [`Hooks`], and hand both to a [`Runner`]:
//!
//! ```
//! use rucumber::{Runner, StepError, StepRegistry, parse_feature, step_ensure};
//!
//! let mut registry = StepRegistry::new();
//! registry
//!     .register(r"^I have (\d+) cucumbers$", |ctx, args| {
//!         ctx.insert("cucumbers", args.parse::<u32>(1)?);
//!         Ok(())
//!     })
//!     .unwrap();
//! registry
//!     .register(r"^I eat (\d+)$", |ctx, args| {
//!         let eaten: u32 = args.parse(1)?;
//!         let Some(left) = ctx.get_mut::<u32>("cucumbers") else {
//!             return Err(StepError::assertion("no cucumbers"));
//!         };
//!         step_ensure!(eaten <= *left, "cannot eat {eaten} of {left}");
//!         *left -= eaten;
//!         Ok(())
//!     })
//!     .unwrap();
//! registry
//!     .register(r"^I have (\d+) left$", |ctx, args| {
//!         let expected: u32 = args.parse(1)?;
//!         step_ensure!(ctx.get::<u32>("cucumbers") == Some(&expected));
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let mut feature = parse_feature(
//!     "Feature: eating\n  Scenario: some\n    Given I have 12 cucumbers\n    When I eat 5\n    Then I have 7 left\n",
//! )
//! .unwrap()
//! .feature;
//!
//! let report = Runner::new(registry).run_feature(&mut feature);
//! assert!(report.status.is_success());
//! ```

mod context;
mod execution;
mod hooks;
mod loader;
mod macros;
mod panic_support;
mod pattern;
mod registry;
mod reporting;
mod step_args;
mod types;

pub mod config;

pub use context::StepContext;
pub use execution::{Runner, execute_step};
pub use hooks::{HookError, HookKind, Hooks};
pub use loader::{FEATURE_EXTENSION, LoadError, feature_paths, load_feature, load_features};
pub use panic_support::panic_message;
pub use pattern::StepPattern;
pub use registry::{RegistryError, ResolvedStep, StepRegistry};
pub use reporting::{FeatureReport, RunReport, RunSummary, ScenarioReport, StepReport};
pub use step_args::StepArgs;
pub use types::{FeatureHook, StepError, StepHandler, StepKeyword, StepOutcome, StepResult};

pub use rucumber_grammar::{
    Feature, GrammarCategory, GrammarViolation, ParseError, ParsedFeature, Scenario, Status,
    Step, StructuralWarning, parse_feature, parse_feature_file,
};
