mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use crate::error::Result;
use crate::linter::Lint;

/// Lints found in one document file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub lints: Vec<Lint>,
}

impl FileReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.lints.is_empty()
    }
}

/// Trait for formatting lint reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

fn total_lints(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.lints.len()).sum()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
