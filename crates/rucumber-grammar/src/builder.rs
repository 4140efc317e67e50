//! Assembles a [`Feature`] from classified lines.

use crate::category::GrammarCategory;
use crate::model::{Feature, Scenario, Step};
use crate::StepKeyword;

/// Consumes `(category, line)` pairs and builds the feature document.
///
/// # Examples
///
/// ```
/// use rucumber_grammar::{FeatureBuilder, GrammarCategory};
///
/// let mut builder = FeatureBuilder::new();
/// builder.push(GrammarCategory::Tag, "@smoke", 1);
/// builder.push(GrammarCategory::Feature, "Feature: login", 2);
/// builder.push(GrammarCategory::Scenario, "Scenario: valid password", 3);
/// builder.push(GrammarCategory::Given, "Given a registered user", 4);
/// let feature = builder.finish();
/// assert_eq!(feature.tags(), ["smoke"]);
/// assert_eq!(feature.scenarios()[0].steps()[0].text(), "a registered user");
/// ```
#[derive(Debug, Default)]
pub struct FeatureBuilder {
    feature: Feature,
}

impl FeatureBuilder {
    /// Start an empty feature.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified line into the feature.
    ///
    /// `line_number` is one-based and only recorded on steps.
    pub fn push(&mut self, category: GrammarCategory, line: &str, line_number: usize) {
        match category {
            GrammarCategory::Start => {}
            GrammarCategory::Tag => self.push_tags(line),
            GrammarCategory::Feature => self.feature.push_description(line),
            GrammarCategory::Scenario => self.push_scenario_line(line),
            GrammarCategory::Given | GrammarCategory::When | GrammarCategory::Then => {
                let keyword = category.step_keyword().unwrap_or(StepKeyword::Given);
                self.push_step(keyword, line, line_number);
            }
        }
    }

    /// Finish building, dropping a trailing scenario that never got a step.
    #[must_use]
    pub fn finish(mut self) -> Feature {
        if let Some(dropped) = self.feature.pop_empty_scenario() {
            log::warn!(
                "dropping scenario without steps: {:?}",
                dropped.title()
            );
        }
        self.feature
    }

    fn push_tags(&mut self, line: &str) {
        let body = line.trim();
        let body = body.strip_prefix('@').unwrap_or(body);
        for tag in body.split_whitespace() {
            let tag = tag.strip_prefix('@').unwrap_or(tag);
            if !tag.is_empty() {
                self.feature.push_tag(tag.to_string());
            }
        }
    }

    fn push_scenario_line(&mut self, line: &str) {
        let needs_new = self
            .feature
            .scenarios()
            .last()
            .is_none_or(|scenario| !scenario.steps().is_empty());
        if needs_new {
            self.feature.push_scenario(Scenario::default());
        }
        if let Some(scenario) = self.feature.last_scenario_mut() {
            scenario.push_description(line);
        }
    }

    fn push_step(&mut self, keyword: StepKeyword, line: &str, line_number: usize) {
        if self.feature.scenarios().is_empty() {
            log::debug!("step outside a scenario; opening an anonymous scenario");
            self.feature.push_scenario(Scenario::default());
        }
        let (_, text) = StepKeyword::split_leading(line);
        if let Some(scenario) = self.feature.last_scenario_mut() {
            scenario.push_step(Step::new(keyword, text, line_number));
        }
    }
}
