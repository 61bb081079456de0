use std::fs;
use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::linter::LinterRegistry;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, WrapGuardError};

use super::print_error;

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(enabled) => {
            println!(
                "Configuration is valid: {} ({enabled} linter(s) enabled)",
                config_path.display()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file and returns the number of enabled linters.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, names an
/// unknown linter, or sets an invalid option.
pub fn run_config_validate_impl(config_path: &Path) -> Result<usize> {
    if !config_path.exists() {
        return Err(WrapGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    let registry = LinterRegistry::from_config(&config)?;

    Ok(registry.linters().len())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
