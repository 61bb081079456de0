use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::linter::Style;

#[must_use]
pub fn run_styles() -> i32 {
    print!("{}", format_styles());
    EXIT_SUCCESS
}

/// One row per style: keyword and the message reported for it.
#[must_use]
pub fn format_styles() -> String {
    let mut output = String::new();
    for style in Style::ALL {
        let default = if style == Style::default() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(output, "{:<7} {}{default}", style.as_str(), style.message());
    }
    output
}

#[cfg(test)]
#[path = "styles_tests.rs"]
mod tests;
