use std::fmt::Write;

use crate::error::Result;

use super::{FileReport, OutputFormatter, total_lints};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// One line per lint, `path:line[:column] [Linter] message`, then a summary.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            for lint in &report.lints {
                let mut location = format!("{}:{}", report.path.display(), lint.line());
                if let Some(column) = lint.location.column() {
                    let _ = write!(location, ":{column}");
                }
                let _ = writeln!(
                    output,
                    "{} {} {}",
                    self.colorize(&location, ansi::CYAN),
                    self.colorize(&format!("[{}]", lint.linter), ansi::RED),
                    lint.message
                );
            }
        }

        let lints = total_lints(reports);
        let with_lints = reports.iter().filter(|r| !r.is_clean()).count();
        let count = if lints == 0 {
            self.colorize("no lints", ansi::GREEN)
        } else {
            self.colorize(&format!("{lints} lint(s) in {with_lints} file(s)"), ansi::RED)
        };
        let _ = writeln!(
            output,
            "\nSummary: {} file(s) checked, {count}",
            reports.len()
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
