use std::collections::{BTreeMap, HashMap};

use crate::config::LinterConfig;
use crate::document::{Document, Element, Visitor};
use crate::error::Result;

use super::{Lint, LinePatterns, Linter, Location, Style};

/// Enforces how element attributes are wrapped: `div(a=b)`, `div{a=b}`,
/// `div[a=b]`, any of those, or no wrapper at all.
///
/// Two passes run over a document:
///
/// 1. A structural pass over every element's attribute list. Static `class`
///    and `id` attributes are shorthand (`.foo`, `#bar`) and never demand a
///    wrapper; every other attribute checks its own line.
/// 2. A textual pass over every source line, which also catches attribute
///    lines the tree does not describe.
///
/// Each line yields at most one lint. When both passes fire on a line the
/// node-anchored lint from the structural pass is kept.
#[derive(Debug, Clone)]
pub struct AttributesWrapper {
    patterns: LinePatterns,
}

impl AttributesWrapper {
    pub const NAME: &'static str = "AttributesWrapper";

    /// # Errors
    /// Returns an error if the regex patterns fail to compile.
    pub fn new(style: Style) -> Result<Self> {
        Ok(Self {
            patterns: LinePatterns::new(style)?,
        })
    }

    /// Build from a `[linters.AttributesWrapper]` section.
    ///
    /// # Errors
    /// Returns an error if `style` is not a string or not a known style.
    pub fn from_config(config: &LinterConfig) -> Result<Self> {
        let style = config
            .fetch_str(Self::NAME, "style", Style::default().as_str())?
            .parse()?;
        Self::new(style)
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.patterns.style()
    }

    fn line_violates(&self, document: &Document, line: usize) -> bool {
        document
            .line(line)
            .is_some_and(|text| self.patterns.violates(text))
    }

    fn lint(&self, location: Location) -> Lint {
        Lint::new(Self::NAME, location, self.style().message())
    }
}

impl Linter for AttributesWrapper {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, document: &Document) -> Vec<Lint> {
        let mut scan = StructuralScan::new(self, document);
        document.walk(&mut scan);
        let StructuralScan {
            mut lints,
            lines: structural_lines,
            ..
        } = scan;

        for (index, text) in document.lines().iter().enumerate() {
            let line = index + 1;
            if lints.contains_key(&line) {
                continue;
            }
            // Lines whose tree nodes carry only shorthand are exempt.
            if structural_lines.get(&line) == Some(&false) {
                continue;
            }
            if self.patterns.violates(text) {
                lints.insert(line, self.lint(Location::Line(line)));
            }
        }

        lints.into_values().collect()
    }
}

/// Tree pass collecting node-anchored lints and the per-line shorthand picture.
struct StructuralScan<'a> {
    linter: &'a AttributesWrapper,
    document: &'a Document,
    lints: BTreeMap<usize, Lint>,
    /// Lines holding an element or attribute, mapped to whether any
    /// non-shorthand attribute sits on that line.
    lines: HashMap<usize, bool>,
}

impl<'a> StructuralScan<'a> {
    fn new(linter: &'a AttributesWrapper, document: &'a Document) -> Self {
        Self {
            linter,
            document,
            lints: BTreeMap::new(),
            lines: HashMap::new(),
        }
    }
}

impl Visitor for StructuralScan<'_> {
    fn visit_element(&mut self, element: &Element) {
        self.lines.entry(element.position.line).or_insert(false);
        for attribute in element.attributes.iter() {
            let line = attribute.position.line;
            let needs_wrapper = self.lines.entry(line).or_insert(false);
            *needs_wrapper |= !attribute.is_shorthand();
        }

        if element.has_only_shorthand() {
            return;
        }

        for attribute in element.attributes.iter().filter(|a| !a.is_shorthand()) {
            let line = attribute.position.line;
            if self.lints.contains_key(&line) || !self.linter.line_violates(self.document, line)
            {
                continue;
            }
            self.lints
                .insert(line, self.linter.lint(Location::Node(attribute.position)));
        }
    }
}

#[cfg(test)]
#[path = "attributes_wrapper_tests.rs"]
mod tests;
