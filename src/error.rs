use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WrapGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown attribute wrapper style '{0}' (expected one of: none, round, curly, square, any)")]
    UnknownStyle(String),

    #[error("Unknown linter '{0}'")]
    UnknownLinter(String),

    #[error("Invalid type for option '{linter}.{option}': expected {expected}")]
    InvalidOption {
        linter: String,
        option: String,
        expected: &'static str,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document {path}: {source}")]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl WrapGuardError {
    /// Short category label used when reporting errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::UnknownStyle(_)
            | Self::UnknownLinter(_)
            | Self::InvalidOption { .. }
            | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidDocument { .. } | Self::JsonSerialize(_) => "Document",
            Self::InvalidPattern { .. } => "Pattern",
        }
    }

    /// Optional hint on how to resolve the error.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownStyle(_) => {
                Some("Set `style` to one of: none, round, curly, square, any")
            }
            Self::UnknownLinter(_) => Some("Run `wrap-guard config validate` to check linter names"),
            Self::InvalidOption { .. } | Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format in .wrap-guard.toml")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::InvalidDocument { .. } => {
                Some("Documents must be JSON objects with `source` and `root` fields")
            }
            Self::InvalidPattern { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WrapGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
