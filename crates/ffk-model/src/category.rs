//! Priority-ordered category rules.

use serde::{Deserialize, Serialize};

use crate::text::contains_ignore_case;

/// Rows that can be assigned to a category by one of their fields.
pub trait Categorized {
    /// The field category rules match against (organizer or subject).
    fn category_field(&self) -> &str;
}

/// How a category claims rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "value", rename_all = "snake_case")]
pub enum Matcher {
    /// Field equals the value exactly.
    Exact(String),
    /// Field contains the keyword, ignoring case.
    Contains(String),
    /// Every row not claimed by an earlier rule.
    CatchAll,
}

impl Matcher {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::Exact(expected) => value == expected,
            Matcher::Contains(keyword) => contains_ignore_case(value, keyword),
            Matcher::CatchAll => true,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Matcher::CatchAll)
    }
}

/// A labelled category. Rules are evaluated in list order, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub matcher: Matcher,
}

impl CategoryRule {
    pub fn new(label: impl Into<String>, matcher: Matcher) -> Self {
        Self {
            label: label.into(),
            matcher,
        }
    }
}
