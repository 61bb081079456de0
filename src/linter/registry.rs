use crate::config::{Config, LinterConfig};
use crate::document::Document;
use crate::error::{Result, WrapGuardError};

use super::{AttributesWrapper, Lint, Linter, lint_document};

/// The set of linters enabled by a configuration.
pub struct LinterRegistry {
    linters: Vec<Box<dyn Linter>>,
}

impl LinterRegistry {
    /// Names accepted under `[linters.<Name>]`.
    pub const NAMES: [&'static str; 1] = [AttributesWrapper::NAME];

    /// Instantiate every enabled linter. Linters without a section run with
    /// their defaults.
    ///
    /// # Errors
    /// Returns an error for unknown linter sections or invalid options.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(unknown) = config
            .linters
            .keys()
            .find(|name| !Self::NAMES.contains(&name.as_str()))
        {
            return Err(WrapGuardError::UnknownLinter(unknown.clone()));
        }

        let mut linters: Vec<Box<dyn Linter>> = Vec::new();
        for name in Self::NAMES {
            let section = config.linter(name).cloned().unwrap_or_default();
            if !section.enabled {
                log::debug!("linter {name} disabled by configuration");
                continue;
            }
            linters.push(Self::build(name, &section)?);
        }

        Ok(Self { linters })
    }

    fn build(name: &str, section: &LinterConfig) -> Result<Box<dyn Linter>> {
        match name {
            AttributesWrapper::NAME => Ok(Box::new(AttributesWrapper::from_config(section)?)),
            other => Err(WrapGuardError::UnknownLinter(other.to_string())),
        }
    }

    #[must_use]
    pub fn linters(&self) -> &[Box<dyn Linter>] {
        &self.linters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linters.is_empty()
    }

    #[must_use]
    pub fn lint(&self, document: &Document) -> Vec<Lint> {
        lint_document(document, &self.linters)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
