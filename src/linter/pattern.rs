use regex::Regex;

use crate::error::{Result, WrapGuardError};

use super::Style;

/// Leading tag name or `.class`/`#id` shorthand chain. ASCII classes only.
const SELECTOR: &str = r"\A(?-u:\s)*[0-9A-Za-z_.#][0-9A-Za-z_.#-]*";

/// A space followed later by `=`, or an opening bracket, with something after it.
const ATTRIBUTE_INTRODUCER: &str = r"(?: .*?=|[({\[]).+";

const DOCTYPE: &str = r"\A(?-u:\s)*doctype(?-u:\b)";

/// Compiled line matchers for one wrapper style.
///
/// Built once per linter instance and never shared between styles.
#[derive(Debug, Clone)]
pub struct LinePatterns {
    style: Style,
    attributes: Regex,
    doctype: Regex,
    conformance: Regex,
}

impl LinePatterns {
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new(style: Style) -> Result<Self> {
        Ok(Self {
            style,
            attributes: compile(&format!("{SELECTOR}{ATTRIBUTE_INTRODUCER}"))?,
            doctype: compile(DOCTYPE)?,
            conformance: compile(&conformance_source(style))?,
        })
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Whether the line carries any attribute syntax at all, regardless of style.
    #[must_use]
    pub fn has_attributes(&self, line: &str) -> bool {
        self.attributes.is_match(line)
    }

    #[must_use]
    pub fn is_doctype(&self, line: &str) -> bool {
        self.doctype.is_match(line)
    }

    /// Whether the selector is directly followed by the style's wrapper.
    ///
    /// Only the open delimiter position and the presence of a close delimiter
    /// later on the line are checked; the wrapped content is not validated.
    #[must_use]
    pub fn conforms(&self, line: &str) -> bool {
        self.conformance.is_match(line)
    }

    /// Attribute line that is not a doctype and does not use the configured wrapper.
    #[must_use]
    pub fn violates(&self, line: &str) -> bool {
        self.has_attributes(line) && !self.is_doctype(line) && !self.conforms(line)
    }
}

fn conformance_source(style: Style) -> String {
    let (open, close) = style.delimiters();
    format!("{SELECTOR}{open}.*{close}.*\\z")
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| WrapGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
