//! Integration tests for `init`, `config validate`, `styles` and global flags.

mod common;

use common::{ROUND_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_lists_subcommands() {
    wrap_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("styles"));
}

#[test]
fn version_prints_name() {
    wrap_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrap-guard"));
}

// =============================================================================
// Init Command
// =============================================================================

#[test]
fn init_creates_config() {
    let fixture = TestFixture::new();

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["init", "--style", "square"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".wrap-guard.toml")).unwrap();
    assert!(content.contains("style = \"square\""));
}

#[test]
fn init_refuses_existing_config_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config(ROUND_CONFIG);

    wrap_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn init_output_is_accepted_by_check() {
    let fixture = TestFixture::new();
    fixture.create_div_document("a.slim.json", "div(data-foo=bar)");

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["init", "--style", "round"])
        .assert()
        .success();

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["check", "--quiet"])
        .assert()
        .success();
}

// =============================================================================
// Config Validate Command
// =============================================================================

#[test]
fn config_validate_accepts_valid_file() {
    let fixture = TestFixture::new();
    fixture.create_config(ROUND_CONFIG);

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_unknown_linter() {
    let fixture = TestFixture::new();
    fixture.create_config("[linters.SpaceBeforeScript]\n");

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SpaceBeforeScript"));
}

#[test]
fn config_validate_rejects_non_string_style() {
    let fixture = TestFixture::new();
    fixture.create_config("[linters.AttributesWrapper]\nstyle = 3\n");

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("style"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    wrap_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// Styles Command
// =============================================================================

#[test]
fn styles_lists_all_styles() {
    wrap_guard!()
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("none"))
        .stdout(predicate::str::contains("Should wrap attributes in { and }"))
        .stdout(predicate::str::contains("Should wrap attributes in either (), [] or {}"));
}
