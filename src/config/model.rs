use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WrapGuardError};

/// Top-level `.wrap-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-linter sections `[linters.<Name>]`, in file order.
    #[serde(default)]
    pub linters: IndexMap<String, LinterConfig>,
}

impl Config {
    #[must_use]
    pub fn linter(&self, name: &str) -> Option<&LinterConfig> {
        self.linters.get(name)
    }

    /// Override a single string option, creating the linter section if missing.
    pub fn set_option(&mut self, linter: &str, option: &str, value: impl Into<String>) {
        self.linters
            .entry(linter.to_string())
            .or_default()
            .options
            .insert(option.to_string(), toml::Value::String(value.into()));
    }
}

/// One `[linters.<Name>]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinterConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Linter-specific options, such as `style`.
    #[serde(flatten)]
    pub options: toml::Table,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: toml::Table::new(),
        }
    }
}

impl LinterConfig {
    /// Look up a string option, falling back to `default` when it is not set.
    ///
    /// # Errors
    /// Returns an error if the option is set to a non-string value.
    pub fn fetch_str<'a>(&'a self, linter: &str, option: &str, default: &'a str) -> Result<&'a str> {
        match self.options.get(option) {
            None => Ok(default),
            Some(toml::Value::String(value)) => Ok(value),
            Some(_) => Err(WrapGuardError::InvalidOption {
                linter: linter.to_string(),
                option: option.to_string(),
                expected: "string",
            }),
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
