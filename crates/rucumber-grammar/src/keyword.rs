//! Step keyword type and parsing utilities.
//!
//! Feature files mark steps with `Given`, `When` and `Then`, plus the `And`
//! and `But` conjunctions which continue whichever of the three came before.
//! The builder resolves conjunctions through the grammar state, so every
//! stored step carries one of the three primary keywords.

use std::fmt;

/// Keyword used to categorise a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
}

const ALL: [StepKeyword; 5] = [
    StepKeyword::Given,
    StepKeyword::When,
    StepKeyword::Then,
    StepKeyword::And,
    StepKeyword::But,
];

impl StepKeyword {
    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber_grammar::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Whether the keyword continues the previous step category.
    #[must_use]
    pub const fn is_conjunction(&self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Split a leading step keyword from `line`.
    ///
    /// `Given`, `When` and `Then` match as a case-insensitive prefix of the
    /// trimmed line, the same test that moves the grammar into their
    /// category. `And` and `But` must stand as a word of their own. A colon
    /// directly after the keyword is dropped with the surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucumber_grammar::StepKeyword;
    ///
    /// assert_eq!(
    ///     StepKeyword::split_leading("  and the door is open"),
    ///     (Some(StepKeyword::And), "the door is open"),
    /// );
    /// assert_eq!(
    ///     StepKeyword::split_leading("Given: a user"),
    ///     (Some(StepKeyword::Given), "a user"),
    /// );
    /// assert_eq!(StepKeyword::split_leading("Android"), (None, "Android"));
    /// ```
    #[must_use]
    pub fn split_leading(line: &str) -> (Option<Self>, &str) {
        let trimmed = line.trim();
        for keyword in ALL {
            let word = keyword.as_str();
            let Some(head) = trimmed.get(..word.len()) else {
                continue;
            };
            let Some(rest) = trimmed.get(word.len()..) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(word) {
                continue;
            }
            if keyword.is_conjunction() && rest.starts_with(char::is_alphanumeric) {
                continue;
            }
            let rest = rest.trim_start();
            let rest = rest.strip_prefix(':').unwrap_or(rest);
            return (Some(keyword), rest.trim_start());
        }
        (None, trimmed)
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Given a user", Some(StepKeyword::Given), "a user")]
    #[case("  THEN   it works  ", Some(StepKeyword::Then), "it works")]
    #[case("But not this", Some(StepKeyword::But), "not this")]
    #[case("When", Some(StepKeyword::When), "")]
    #[case("Given: a user", Some(StepKeyword::Given), "a user")]
    #[case("when:the user logs in", Some(StepKeyword::When), "the user logs in")]
    #[case("Thenceforth the user is in", Some(StepKeyword::Then), "ceforth the user is in")]
    #[case("and, later", Some(StepKeyword::And), ", later")]
    #[case("Android phones", None, "Android phones")]
    #[case("Butter", None, "Butter")]
    #[case("more context", None, "more context")]
    fn splits_leading_keyword(
        #[case] line: &str,
        #[case] keyword: Option<StepKeyword>,
        #[case] rest: &str,
    ) {
        assert_eq!(StepKeyword::split_leading(line), (keyword, rest));
    }

    #[test]
    fn conjunctions_are_flagged() {
        assert!(StepKeyword::And.is_conjunction());
        assert!(StepKeyword::But.is_conjunction());
        assert!(!StepKeyword::Given.is_conjunction());
    }
}
