//! Grammar categories and the transition table between them.
//!
//! Every non-blank line of a feature file belongs to one category. The
//! category a line *declares* comes from its leading keyword; lines without a
//! recognised keyword (free text, `And`, `But`) declare nothing and inherit
//! the current category where the table allows it.

use std::fmt;

use crate::StepKeyword;

/// Classification of a feature-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrammarCategory {
    /// Nothing has been read yet.
    #[default]
    Start,
    /// A `@tag` line.
    Tag,
    /// A `Feature:` header or its continuation text.
    Feature,
    /// A `Scenario:` header or its continuation text.
    Scenario,
    /// A `Given` step or a conjunction continuing one.
    Given,
    /// A `When` step or a conjunction continuing one.
    When,
    /// A `Then` step or a conjunction continuing one.
    Then,
}

/// Categories in which a feature file may legally end.
pub const TERMINAL_CATEGORIES: &[GrammarCategory] = &[GrammarCategory::Then];

const HEADER_KEYWORDS: [(&str, GrammarCategory); 3] = [
    ("@", GrammarCategory::Tag),
    ("feature:", GrammarCategory::Feature),
    ("scenario:", GrammarCategory::Scenario),
];

impl GrammarCategory {
    /// Lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Tag => "tag",
            Self::Feature => "feature",
            Self::Scenario => "scenario",
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
        }
    }

    /// Categories a line may declare while the machine is in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber_grammar::GrammarCategory;
    ///
    /// assert_eq!(
    ///     GrammarCategory::Then.permitted(),
    ///     &[GrammarCategory::Then, GrammarCategory::Scenario],
    /// );
    /// ```
    #[must_use]
    pub const fn permitted(self) -> &'static [Self] {
        match self {
            Self::Start | Self::Tag => &[Self::Tag, Self::Feature],
            Self::Feature => &[Self::Feature, Self::Scenario],
            Self::Scenario => &[Self::Scenario, Self::Given],
            Self::Given => &[Self::Given, Self::When, Self::Then],
            Self::When => &[Self::When, Self::Then],
            Self::Then => &[Self::Then, Self::Scenario],
        }
    }

    /// Whether a line must declare a permitted category to be accepted.
    ///
    /// States that do not require a match treat keyword-less lines as
    /// continuation text and stay where they are.
    #[must_use]
    pub const fn requires_explicit_match(self) -> bool {
        matches!(self, Self::Start | Self::Tag)
    }

    /// Whether a file may end while the machine is in `self`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Then)
    }

    /// The primary step keyword for step categories.
    #[must_use]
    pub const fn step_keyword(self) -> Option<StepKeyword> {
        match self {
            Self::Given => Some(StepKeyword::Given),
            Self::When => Some(StepKeyword::When),
            Self::Then => Some(StepKeyword::Then),
            Self::Start | Self::Tag | Self::Feature | Self::Scenario => None,
        }
    }

    /// Detect the category a line declares through its leading keyword.
    ///
    /// Headers and tags match a case-insensitive prefix of the trimmed line.
    /// Step categories come from [`StepKeyword::split_leading`], so a line is
    /// classified by exactly the keyword the builder later strips from it.
    /// Conjunctions and free text declare nothing and yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber_grammar::GrammarCategory;
    ///
    /// assert_eq!(GrammarCategory::declared_by("  @wip"), Some(GrammarCategory::Tag));
    /// assert_eq!(GrammarCategory::declared_by("SCENARIO: x"), Some(GrammarCategory::Scenario));
    /// assert_eq!(GrammarCategory::declared_by("And more"), None);
    /// ```
    #[must_use]
    pub fn declared_by(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        let header = HEADER_KEYWORDS.iter().find(|(keyword, _)| {
            trimmed
                .get(..keyword.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
        });
        if let Some(&(_, category)) = header {
            return Some(category);
        }
        match StepKeyword::split_leading(trimmed).0? {
            StepKeyword::Given => Some(Self::Given),
            StepKeyword::When => Some(Self::When),
            StepKeyword::Then => Some(Self::Then),
            StepKeyword::And | StepKeyword::But => None,
        }
    }
}

impl fmt::Display for GrammarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a category list as `a, b, c`.
pub(crate) fn join(categories: &[GrammarCategory]) -> String {
    categories
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
