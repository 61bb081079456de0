pub mod check;
pub mod config;
pub mod init;
pub mod styles;

pub use check::{lint_file, load_config, run_check, run_check_impl};
pub use config::{run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use styles::{format_styles, run_styles};

use std::io::Write;

use crate::error::WrapGuardError;

/// Print an error with its category and hint, if any, to stderr.
pub(crate) fn print_error(err: &WrapGuardError) {
    let mut stderr = std::io::stderr().lock();
    write_error(&mut stderr, err);
}

/// Format: `Error [{error_type}]: {message}`, then `  Hint: {suggestion}` (optional).
fn write_error<W: Write>(w: &mut W, err: &WrapGuardError) {
    // Nothing useful to do if stderr itself is gone.
    let _ = writeln!(w, "Error [{}]: {err}", err.error_type());
    if let Some(hint) = err.suggestion() {
        let _ = writeln!(w, "  Hint: {hint}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
