//! HTML rendering.
//!
//! Two surfaces over the same attribute rules:
//!
//! - the nested API ([`render`], [`render_into`]) walks a [`Node`] tree and
//!   is infallible, since the tree types cannot express malformed markup;
//! - the flat API ([`start_tag`], [`void_tag`], [`element`],
//!   [`element_html`]) builds single tags from an [`Attrs`] collection and
//!   suppresses internal (underscore-prefixed) attributes.
//!
//! Whether an element self-closes is decided by its [`Content`] alone; the
//! [`is_void_tag`] table is advisory for callers of the flat API.

use crate::attr::{Attrs, render_attr};
use crate::node::{Content, Element, Node};
use crate::value::Scalar;

// =============================================================================
// Nested rendering
// =============================================================================

/// Render a markup tree to an HTML string.
pub fn render(node: &Node) -> String {
    let mut output = String::new();
    render_into(node, &mut output);
    output
}

/// Render a markup tree, appending to an existing buffer.
pub fn render_into(node: &Node, output: &mut String) {
    match node {
        Node::Empty => {}
        Node::Fragment(nodes) => {
            for child in nodes {
                render_into(child, output);
            }
        }
        Node::Element(elem) => render_element(elem, output),
        Node::Text(text) => text.write_html(output),
        Node::Html(raw) => output.push_str(raw),
    }
}

/// Render an element according to its content mode.
fn render_element(elem: &Element, output: &mut String) {
    match &elem.content {
        Content::Void => write_void_tag(&elem.tag, &elem.attrs, false, output),
        Content::Nested(inner) => {
            write_start_tag(&elem.tag, &elem.attrs, false, output);
            render_into(inner, output);
            write_end_tag(&elem.tag, output);
        }
        Content::Text(text) => {
            write_start_tag(&elem.tag, &elem.attrs, false, output);
            text.write_html(output);
            write_end_tag(&elem.tag, output);
        }
        Content::Html(raw) => {
            write_start_tag(&elem.tag, &elem.attrs, false, output);
            output.push_str(raw);
            write_end_tag(&elem.tag, output);
        }
    }
}

// =============================================================================
// Flat tag API
// =============================================================================

/// Generate a start tag: `<tag attrs>`.
///
/// Attributes whose name starts with `_` are internal and not rendered.
pub fn start_tag(tag: &str, attrs: &Attrs) -> String {
    let mut output = String::new();
    write_start_tag(tag, attrs, true, &mut output);
    output
}

/// Generate a self-closed tag: `<tag attrs/>`.
///
/// Attributes whose name starts with `_` are internal and not rendered.
pub fn void_tag(tag: &str, attrs: &Attrs) -> String {
    let mut output = String::new();
    write_void_tag(tag, attrs, true, &mut output);
    output
}

/// Generate a complete element with escaped text content.
pub fn element(tag: &str, attrs: &Attrs, text: impl Into<Scalar>) -> String {
    let mut output = String::new();
    write_start_tag(tag, attrs, true, &mut output);
    text.into().write_html(&mut output);
    write_end_tag(tag, &mut output);
    output
}

/// Generate a complete element with pre-built HTML content, emitted verbatim.
pub fn element_html(tag: &str, attrs: &Attrs, html: &str) -> String {
    let mut output = String::new();
    write_start_tag(tag, attrs, true, &mut output);
    output.push_str(html);
    write_end_tag(tag, &mut output);
    output
}

/// Check if a tag name is an HTML void element.
///
/// Advisory only: rendering self-closes on [`Content::Void`] alone and never
/// consults this table.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "menuitem"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Internals
// =============================================================================

fn write_start_tag(tag: &str, attrs: &Attrs, skip_internal: bool, output: &mut String) {
    output.push('<');
    output.push_str(tag);
    write_attrs(attrs, skip_internal, output);
    output.push('>');
}

fn write_void_tag(tag: &str, attrs: &Attrs, skip_internal: bool, output: &mut String) {
    output.push('<');
    output.push_str(tag);
    write_attrs(attrs, skip_internal, output);
    output.push_str("/>");
}

fn write_end_tag(tag: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn write_attrs(attrs: &Attrs, skip_internal: bool, output: &mut String) {
    for (name, value) in attrs.iter() {
        if skip_internal && name.starts_with('_') {
            continue;
        }
        render_attr(name, value, output);
    }
}

// =============================================================================
// Tests
// =============================================================================
