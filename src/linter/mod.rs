mod attributes_wrapper;
mod pattern;
mod registry;
mod style;

pub use attributes_wrapper::AttributesWrapper;
pub use pattern::LinePatterns;
pub use registry::LinterRegistry;
pub use style::Style;

use crate::document::{Document, Position};

/// A rule run against one document at a time.
///
/// Implementations hold no per-document state, so a single instance can lint
/// many documents concurrently.
pub trait Linter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lint a document. Results are ordered by line, at most one per line.
    fn run(&self, document: &Document) -> Vec<Lint>;
}

/// Where a lint points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A whole source line (1-based).
    Line(usize),
    /// A tree node, keeping whatever position the parser attached to it.
    Node(Position),
}

impl Location {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Line(line) => *line,
            Self::Node(position) => position.line,
        }
    }

    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::Line(_) => None,
            Self::Node(position) => position.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lint {
    pub linter: &'static str,
    pub location: Location,
    pub message: String,
}

impl Lint {
    #[must_use]
    pub fn new(linter: &'static str, location: Location, message: impl Into<String>) -> Self {
        Self {
            linter,
            location,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.location.line()
    }
}

/// Run every linter over `document` and merge their lints by line.
#[must_use]
pub fn lint_document(document: &Document, linters: &[Box<dyn Linter>]) -> Vec<Lint> {
    let mut lints: Vec<Lint> = linters
        .iter()
        .flat_map(|linter| linter.run(document))
        .collect();
    // Stable sort keeps linter order within a line.
    lints.sort_by_key(Lint::line);
    lints
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
