//! Markup tree node types.
//!
//! A [`Node`] is the unit of the tree: nothing, a sequence, an element, text,
//! or raw HTML. Malformed trees are unrepresentable, which is what keeps
//! rendering infallible.

mod element;

pub use element::{Content, Element};

use crate::value::Scalar;

// =============================================================================
// Node
// =============================================================================

/// A node in the markup tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Renders nothing
    #[default]
    Empty,
    /// A sequence of nodes rendered in order, with no wrapper markup
    Fragment(Vec<Node>),
    /// An element (boxed to break the recursive type)
    Element(Box<Element>),
    /// Text, escaped on render
    Text(Scalar),
    /// Pre-built HTML, emitted verbatim
    Html(String),
}

impl Node {
    /// Check if this node is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this node is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this node renders nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Get element reference if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element reference if this is an element
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get the text scalar if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&Scalar> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Concatenated text of this subtree (raw HTML contributes nothing)
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Empty | Node::Html(_) => {}
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(buf);
                }
            }
            Node::Element(e) => match &e.content {
                Content::Nested(inner) => inner.collect_text(buf),
                Content::Text(s) => buf.push_str(&s.to_text()),
                Content::Void | Content::Html(_) => {}
            },
            Node::Text(s) => buf.push_str(&s.to_text()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(Box::new(element))
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.into())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value.into())
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Text(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Node::Empty,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
