//! Builders for hand-made documents used across unit tests.
//!
//! They produce the tree a template parser would hand over, so tests can pair
//! a source snippet with the matching structure.

use crate::document::{
    Attribute, AttributeList, AttributeValue, Document, Element, Other, Position, SyntaxNode,
};

pub fn static_attr(name: &str, value: &str, line: usize) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: AttributeValue::Static(value.to_string()),
        position: Position::line(line),
    }
}

pub fn dynamic_attr(name: &str, value: &str, line: usize) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: AttributeValue::Interpolated(value.to_string()),
        position: Position::line(line),
    }
}

pub fn boolean_attr(name: &str, line: usize) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: AttributeValue::Empty,
        position: Position::line(line),
    }
}

pub fn element(tag: &str, line: usize, attributes: Vec<Attribute>) -> SyntaxNode {
    element_with_children(tag, line, attributes, Vec::new())
}

pub fn element_with_children(
    tag: &str,
    line: usize,
    attributes: Vec<Attribute>,
    children: Vec<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::Element(Element {
        tag: tag.to_string(),
        position: Position::line(line),
        attributes: AttributeList {
            position: Position::line(line),
            attributes,
        },
        children,
    })
}

pub fn other(line: usize) -> SyntaxNode {
    SyntaxNode::Other(Other {
        position: Position::line(line),
        children: Vec::new(),
    })
}

pub fn document(source: &str, children: Vec<SyntaxNode>) -> Document {
    let root = SyntaxNode::Other(Other {
        position: Position::line(1),
        children,
    });
    Document::new(source, root)
}

/// Single-line `div` with one interpolated `data-foo` attribute, the most
/// common shape in the wrapper tests.
pub fn div_with_data_foo(source: &str) -> Document {
    document(
        source,
        vec![element("div", 1, vec![dynamic_attr("data-foo", "bar", 1)])],
    )
}
