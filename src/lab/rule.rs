//! Step rules — tagged acceptance predicates evaluated generically.

use serde::{Deserialize, Serialize};

// =============================================================================
// VALUE
// =============================================================================

/// The value of a simulated console field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    /// A checkbox or button press.
    Flag(bool),
    /// A text input or single-choice select.
    Text(String),
    /// A multi-select.
    List(Vec<String>),
}

impl LabValue {
    /// Character count for text, element count for lists, `None` for flags.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Flag(_) => None,
            Self::Text(s) => Some(s.chars().count()),
            Self::List(items) => Some(items.len()),
        }
    }

    /// Substring match for text, element match for lists.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Flag(_) => false,
            Self::Text(s) => s.contains(needle),
            Self::List(items) => items.iter().any(|item| item == needle),
        }
    }
}

impl From<bool> for LabValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for LabValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for LabValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<String>> for LabValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

// =============================================================================
// RULE
// =============================================================================

/// One predicate attached to a lab step.
///
/// Rules apply to the step's `expected_action` field. Anti-pattern rules are
/// consulted before acceptance rules and carry their own feedback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepRule {
    Equals { expected: LabValue },
    Contains { substring: String },
    LengthAtLeast { min: usize },
    AntiPattern { rejected: Vec<LabValue>, message: String },
}

impl StepRule {
    #[must_use]
    pub fn is_anti_pattern(&self) -> bool {
        matches!(self, Self::AntiPattern { .. })
    }

    /// Whether this acceptance rule is satisfied. Anti-patterns never accept.
    #[must_use]
    pub fn accepts(&self, value: &LabValue) -> bool {
        match self {
            Self::Equals { expected } => expected == value,
            Self::Contains { substring } => value.contains(substring),
            Self::LengthAtLeast { min } => value.len().is_some_and(|len| len >= *min),
            Self::AntiPattern { .. } => false,
        }
    }

    /// The anti-pattern message when `value` is one of the rejected values.
    #[must_use]
    pub fn rejection(&self, value: &LabValue) -> Option<&str> {
        match self {
            Self::AntiPattern { rejected, message } if rejected.contains(value) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result of evaluating a step's rules against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    Accept,
    /// A deliberate anti-pattern; carries its specific message.
    AntiPattern(&'a str),
    NoMatch,
}

/// Evaluate `rules` in two passes: anti-patterns first, then acceptance.
#[must_use]
pub fn evaluate<'a>(rules: &'a [StepRule], value: &LabValue) -> Verdict<'a> {
    if let Some(message) = rules.iter().find_map(|rule| rule.rejection(value)) {
        return Verdict::AntiPattern(message);
    }
    if rules.iter().any(|rule| rule.accepts(value)) {
        Verdict::Accept
    } else {
        Verdict::NoMatch
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod tests;
