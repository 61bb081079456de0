use serde::Serialize;

use crate::error::Result;
use crate::linter::Lint;

use super::{FileReport, OutputFormatter, total_lints};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    lints: Vec<JsonLint>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    files_with_lints: usize,
    lints: usize,
}

#[derive(Serialize)]
struct JsonLint {
    path: String,
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    linter: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                files_with_lints: reports.iter().filter(|r| !r.is_clean()).count(),
                lints: total_lints(reports),
            },
            lints: reports
                .iter()
                .flat_map(|report| {
                    let path = report.path.display().to_string();
                    report.lints.iter().map(move |lint| convert_lint(&path, lint))
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_lint(path: &str, lint: &Lint) -> JsonLint {
    JsonLint {
        path: path.to_string(),
        line: lint.line(),
        column: lint.location.column(),
        linter: lint.linter,
        message: lint.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
