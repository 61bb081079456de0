use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = WrapGuardError::Config("linters must be a table".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: linters must be a table"
    );
}

#[test]
fn error_display_unknown_style() {
    let err = WrapGuardError::UnknownStyle("angle".to_string());
    let msg = err.to_string();
    assert!(msg.contains("'angle'"));
    assert!(msg.contains("none, round, curly, square, any"));
}

#[test]
fn error_display_invalid_option() {
    let err = WrapGuardError::InvalidOption {
        linter: "AttributesWrapper".to_string(),
        option: "style".to_string(),
        expected: "string",
    };
    assert_eq!(
        err.to_string(),
        "Invalid type for option 'AttributesWrapper.style': expected string"
    );
}

#[test]
fn error_display_file_read() {
    let err = WrapGuardError::FileRead {
        path: PathBuf::from("page.slim.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("page.slim.json"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        WrapGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        WrapGuardError::UnknownStyle("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        WrapGuardError::UnknownLinter("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        WrapGuardError::FileRead {
            path: PathBuf::from("a.slim.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "IO"
    );
    assert_eq!(
        WrapGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn invalid_document_is_document_error() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = WrapGuardError::InvalidDocument {
        path: PathBuf::from("broken.slim.json"),
        source,
    };
    assert_eq!(err.error_type(), "Document");
    assert!(err.to_string().contains("broken.slim.json"));
    assert!(err.suggestion().unwrap().contains("`source` and `root`"));
}

#[test]
fn toml_parse_error_converts() {
    let toml_err = toml::from_str::<toml::Table>("[linters").unwrap_err();
    let err: WrapGuardError = toml_err.into();
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn suggestion_unknown_style_lists_styles() {
    let err = WrapGuardError::UnknownStyle("angle".to_string());
    assert!(err.suggestion().unwrap().contains("round"));
}

#[test]
fn suggestion_file_read_not_found() {
    let err = WrapGuardError::FileRead {
        path: PathBuf::from("missing.slim.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("file path exists"));
}

#[test]
fn suggestion_file_read_permission_denied() {
    let err = WrapGuardError::FileRead {
        path: PathBuf::from("protected.slim.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
    };
    assert!(err.suggestion().unwrap().contains("permissions"));
}

#[test]
fn suggestion_file_read_other_error_has_none() {
    let err = WrapGuardError::FileRead {
        path: PathBuf::from("unknown.slim.json"),
        source: std::io::Error::other("unknown error"),
    };
    assert!(err.suggestion().is_none());
}

#[test]
fn invalid_pattern_keeps_source() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    let err = WrapGuardError::InvalidPattern {
        pattern: "(".to_string(),
        source: regex_err,
    };
    assert_eq!(err.error_type(), "Pattern");
    assert!(std::error::Error::source(&err).is_some());
}
