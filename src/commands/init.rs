use std::fs;

use crate::cli::InitArgs;
use crate::linter::Style;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, WrapGuardError};

use super::print_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(WrapGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template(args.style))?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template(style: Style) -> String {
    format!(
        r#"# wrap-guard configuration file

[linters.AttributesWrapper]
enabled = true

# How element attributes must be wrapped:
#   none   - div data-foo="bar"
#   round  - div(data-foo="bar")
#   curly  - div{{data-foo="bar"}}
#   square - div[data-foo="bar"]
#   any    - any of round, curly or square
style = "{style}"
"#
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
