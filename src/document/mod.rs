//! Host-side view of a parsed template: verbatim source lines plus the syntax
//! tree produced by the template parser.

mod node;
mod visit;

pub use node::{Attribute, AttributeList, AttributeValue, Element, Other, Position, SyntaxNode};
pub use visit::{Visitor, walk};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WrapGuardError};

/// A source document together with its parsed tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    root: SyntaxNode,
}

/// JSON interchange shape written by the host parser.
#[derive(Debug, Serialize, Deserialize)]
struct RawDocument {
    source: String,
    root: SyntaxNode,
}

impl Document {
    #[must_use]
    pub fn new(source: &str, root: SyntaxNode) -> Self {
        // `str::lines` strips both `\n` and `\r\n`.
        let lines = source.lines().map(str::to_string).collect();
        Self { lines, root }
    }

    /// Parse a document from its JSON interchange form.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid document.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Ok(Self::new(&raw.source, raw.root))
    }

    /// Read and parse a document file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid document.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WrapGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| WrapGuardError::InvalidDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 1-based line lookup; `None` outside `1..=line_count()`.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Walk the whole tree with `visitor`.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk(&self.root, visitor);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
