use super::node::{Attribute, AttributeList, Element, Other, SyntaxNode};

/// Callbacks invoked by [`walk`], one per node kind.
///
/// Every method defaults to a no-op so a linter only implements the shapes it
/// cares about.
pub trait Visitor {
    fn visit_element(&mut self, _element: &Element) {}

    fn visit_attribute_list(&mut self, _list: &AttributeList) {}

    fn visit_attribute(&mut self, _attribute: &Attribute) {}

    fn visit_other(&mut self, _other: &Other) {}
}

/// Depth-first traversal in document order.
///
/// An element is visited before its attribute list, the list before each of
/// its attributes, and all attributes before the element's children.
pub fn walk<V: Visitor + ?Sized>(node: &SyntaxNode, visitor: &mut V) {
    match node {
        SyntaxNode::Element(element) => {
            visitor.visit_element(element);
            walk_attribute_list(&element.attributes, visitor);
            for child in &element.children {
                walk(child, visitor);
            }
        }
        SyntaxNode::AttributeList(list) => walk_attribute_list(list, visitor),
        SyntaxNode::Attribute(attribute) => visitor.visit_attribute(attribute),
        SyntaxNode::Other(other) => {
            visitor.visit_other(other);
            for child in &other.children {
                walk(child, visitor);
            }
        }
    }
}

fn walk_attribute_list<V: Visitor + ?Sized>(list: &AttributeList, visitor: &mut V) {
    visitor.visit_attribute_list(list);
    for attribute in list.iter() {
        visitor.visit_attribute(attribute);
    }
}
