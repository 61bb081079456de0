use serde::{Deserialize, Serialize};

/// Source position attached to a node by the host parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, when the parser records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Position {
    #[must_use]
    pub const fn line(line: usize) -> Self {
        Self { line, column: None }
    }

    #[must_use]
    pub const fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::line(1)
    }
}

/// A node of the parsed template tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    Element(Element),
    AttributeList(AttributeList),
    Attribute(Attribute),
    /// Anything the linter does not inspect: text, control code, output, the root.
    Other(Other),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, `div` for implicit shorthand-only tags like `.foo`.
    pub tag: String,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub attributes: AttributeList,
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

impl Element {
    /// True when every attribute is static `class`/`id` shorthand.
    ///
    /// An element without attributes is vacuously shorthand-only.
    #[must_use]
    pub fn has_only_shorthand(&self) -> bool {
        self.attributes.iter().all(Attribute::is_shorthand)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeList {
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl AttributeList {
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
    #[serde(flatten)]
    pub position: Position,
}

impl Attribute {
    /// `class` and `id` with a literal value are written as `.name` / `#name`.
    #[must_use]
    pub fn is_shorthand(&self) -> bool {
        matches!(self.name.as_str(), "class" | "id") && self.value.is_static()
    }
}

/// How the parser classified an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// Literal known at lint time.
    Static(String),
    /// Quoted string that may contain interpolation.
    Interpolated(String),
    /// Bare code such as `data-foo=bar`.
    Expression(String),
    /// Boolean attribute written without a value.
    Empty,
}

impl AttributeValue {
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Other {
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}
