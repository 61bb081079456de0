#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the wrap-guard binary.
#[macro_export]
macro_rules! wrap_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wrap-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.wrap-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".wrap-guard.toml", content);
    }

    /// Creates a document holding one `div` on line 1 with an interpolated
    /// `data-foo` attribute at column 5.
    pub fn create_div_document(&self, relative_path: &str, source: &str) {
        self.create_file(relative_path, &div_document(source));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON document for a single-line `div` with one dynamic attribute.
pub fn div_document(source: &str) -> String {
    let source = serde_json::to_string(source).expect("Failed to encode source");
    format!(
        r#"{{ "source": {source}, "root": {{ "kind": "other", "line": 1, "children": [
            {{ "kind": "element", "tag": "div", "line": 1,
               "attributes": {{ "line": 1, "attributes": [
                 {{ "name": "data-foo", "line": 1, "column": 5,
                    "value": {{ "type": "interpolated", "value": "bar" }} }}
               ] }} }}
        ] }} }}"#
    )
}

/// Three lines: a wrapped `div`, a shorthand-only `p.note`, and a plain
/// text line that looks like an attribute assignment.
pub const MIXED_DOCUMENT: &str = r#"{
  "source": "div(data-foo=\"bar\")\np.note\n.total Sum = 5\n",
  "root": { "kind": "other", "line": 1, "children": [
    { "kind": "element", "tag": "div", "line": 1,
      "attributes": { "line": 1, "attributes": [
        { "name": "data-foo", "line": 1, "column": 5,
          "value": { "type": "static", "value": "bar" } }
      ] } },
    { "kind": "element", "tag": "p", "line": 2,
      "attributes": { "line": 2, "attributes": [
        { "name": "class", "line": 2, "value": { "type": "static", "value": "note" } }
      ] } },
    { "kind": "element", "tag": "div", "line": 3,
      "attributes": { "line": 3, "attributes": [
        { "name": "class", "line": 3, "value": { "type": "static", "value": "total" } }
      ] },
      "children": [ { "kind": "other", "line": 3 } ] }
  ] }
}"#;

/// Config requiring round wrappers.
pub const ROUND_CONFIG: &str = r#"
[linters.AttributesWrapper]
enabled = true
style = "round"
"#;

/// Config disabling the only linter.
pub const DISABLED_CONFIG: &str = r"
[linters.AttributesWrapper]
enabled = false
";
