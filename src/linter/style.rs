use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WrapGuardError;

/// Attribute wrapper policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `div data-foo="bar"`
    #[default]
    None,
    /// `div(data-foo="bar")`
    Round,
    /// `div{data-foo="bar"}`
    Curly,
    /// `div[data-foo="bar"]`
    Square,
    /// Any of the three bracket pairs.
    Any,
}

impl Style {
    pub const ALL: [Self; 5] = [Self::None, Self::Round, Self::Curly, Self::Square, Self::Any];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Round => "round",
            Self::Curly => "curly",
            Self::Square => "square",
            Self::Any => "any",
        }
    }

    /// Regex fragments for the open and close delimiter.
    ///
    /// `none` expects a space after the selector and nothing in particular
    /// afterwards. `any` does not pair the open bracket with its own closing
    /// bracket, so `div(data-foo]` is accepted.
    #[must_use]
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::None => (" ", ""),
            Self::Round => (r"\(", r"\)"),
            Self::Curly => (r"\{", r"\}"),
            Self::Square => (r"\[", r"\]"),
            Self::Any => (r"[({\[]", r"[)}\]]"),
        }
    }

    /// Literal delimiter characters, for bracket styles only.
    #[must_use]
    pub const fn brackets(self) -> Option<(char, char)> {
        match self {
            Self::Round => Some(('(', ')')),
            Self::Curly => Some(('{', '}')),
            Self::Square => Some(('[', ']')),
            Self::None | Self::Any => None,
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        match (self, self.brackets()) {
            (_, Some((open, close))) => format!("Should wrap attributes in {open} and {close}"),
            (Self::Any, None) => "Should wrap attributes in either (), [] or {}".to_string(),
            _ => "Should not have any attribute wrapper characters".to_string(),
        }
    }
}

impl FromStr for Style {
    type Err = WrapGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| WrapGuardError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
