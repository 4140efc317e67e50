//! Feature-file grammar for rucumber.
//!
//! Feature files are read line by line. Each line is classified into a
//! [`GrammarCategory`], the [`GrammarStateMachine`] checks that the category
//! may follow the previous one, and the [`FeatureBuilder`] folds the line into
//! a [`Feature`] document. [`parse_feature`] and [`parse_feature_file`] wire
//! the pieces together.

mod builder;
mod category;
mod errors;
mod keyword;
mod machine;
mod model;
mod parser;

pub use builder::FeatureBuilder;
pub use category::{GrammarCategory, TERMINAL_CATEGORIES};
pub use errors::{GrammarViolation, ParseError, StructuralWarning};
pub use keyword::StepKeyword;
pub use machine::{GrammarStateMachine, transition};
pub use model::{Feature, Scenario, Status, Step};
pub use parser::{ParsedFeature, is_ignorable, parse_feature, parse_feature_file};
