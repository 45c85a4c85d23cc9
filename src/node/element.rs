//! Element type - an HTML element with tag, attributes, and content.
//!
//! The core building block of the markup tree.

use compact_str::CompactString;

use crate::attr::{AttrValue, Attrs, AttrsExt};
use crate::value::Scalar;

use super::Node;

// =============================================================================
// Content
// =============================================================================

/// Content mode of an element.
///
/// The mode decides whether the element self-closes: `Void` renders
/// `<tag/>`, every other mode renders an open and a close tag around its
/// payload, even when the payload is empty. No tag-name table is consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    /// No content: the element renders self-closed
    #[default]
    Void,
    /// Nested markup between the tags
    Nested(Node),
    /// Text between the tags, escaped on render
    Text(Scalar),
    /// Pre-built HTML between the tags, emitted verbatim
    Html(String),
}

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and one content mode
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Element attributes, in rendering order
    pub attrs: Attrs,
    /// What goes between (or instead of) the tags
    pub content: Content,
}

impl Element {
    /// Create a void element with no attributes
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            content: Content::Void,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute, consuming and returning the element
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Set the `id` attribute
    pub fn with_id(self, id: impl Into<AttrValue>) -> Self {
        self.attr("id", id)
    }

    /// Set the `class` attribute
    pub fn with_class(self, class: impl Into<AttrValue>) -> Self {
        self.attr("class", class)
    }

    /// Put nested markup between the tags.
    ///
    /// Replaces any previous content; the last content setter wins.
    pub fn inner(mut self, node: impl Into<Node>) -> Self {
        self.content = Content::Nested(node.into());
        self
    }

    /// Put escaped text between the tags (replaces previous content)
    pub fn text(mut self, value: impl Into<Scalar>) -> Self {
        self.content = Content::Text(value.into());
        self
    }

    /// Put raw HTML between the tags (replaces previous content)
    pub fn html(mut self, raw: impl Into<String>) -> Self {
        self.content = Content::Html(raw.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) {
        self.attrs.set_attr(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed
    pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.attrs.remove_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Other helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if the element self-closes
    pub fn is_void(&self) -> bool {
        matches!(self.content, Content::Void)
    }

    /// Text content of this element (raw HTML contributes nothing)
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::Nested(inner) => inner.text_content(),
            Content::Text(s) => s.to_text(),
            Content::Void | Content::Html(_) => String::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
