//! JSON to markup tree conversion.
//!
//! Maps the loose element description callers pass as JSON onto [`Node`]:
//!
//! - `null` becomes [`Node::Empty`], an array becomes a [`Node::Fragment`]
//!   of its converted items;
//! - an object with a `"tag"` key becomes an element: `"attr"` holds the
//!   attributes, and the first of `"inner"` / `"text"` / `"html"` present
//!   supplies the content;
//! - an object without `"tag"` must carry `"text"` or `"html"` and becomes
//!   bare text or a bare raw fragment.
//!
//! Two rules carry most of the edge cases. A `"tag"` whose value is `null`
//! counts as absent. Content keys win by PRESENCE, not value:
//! `{"tag": "span", "inner": null}` is an element with empty nested content,
//! rendered `<span></span>`, while `{"tag": "span"}` renders `<span/>`.

use compact_str::CompactString;
use serde_json::Value;

use crate::attr::{AttrValue, Attrs};
use crate::error::{HtmlError, HtmlResult};
use crate::node::{Content, Element, Node};
use crate::render;
use crate::value::Scalar;

// =============================================================================
// Conversion internals
// =============================================================================

fn node_from_json(value: &Value) -> HtmlResult<Node> {
    match value {
        Value::Null => Ok(Node::Empty),
        Value::Array(items) => Ok(Node::Fragment(
            items.iter().map(node_from_json).collect::<HtmlResult<Vec<_>>>()?,
        )),
        Value::Object(map) => record_from_json(map),
        other => Err(HtmlError::type_mismatch(json_type_name(other))),
    }
}

fn record_from_json(map: &serde_json::Map<String, Value>) -> HtmlResult<Node> {
    if map.is_empty() {
        return Ok(Node::Empty);
    }

    let tag = match map.get("tag") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Null) | None => None,
        Some(other) => return Err(HtmlError::type_mismatch(json_type_name(other))),
    };

    let Some(tag) = tag else {
        // Tagless records carry bare content; attributes are ignored here.
        return if let Some(text) = map.get("text") {
            Ok(Node::Text(scalar_from_json(text)?))
        } else if let Some(html) = map.get("html") {
            Ok(Node::Html(scalar_from_json(html)?.to_text()))
        } else {
            Err(HtmlError::structure("expected key 'tag', 'text', or 'html'"))
        };
    };

    let attrs = attrs_from_json(map.get("attr"))?;

    let content = if let Some(inner) = map.get("inner") {
        Content::Nested(node_from_json(inner)?)
    } else if let Some(text) = map.get("text") {
        Content::Text(scalar_from_json(text)?)
    } else if let Some(html) = map.get("html") {
        Content::Html(scalar_from_json(html)?.to_text())
    } else {
        Content::Void
    };

    Ok(Node::Element(Box::new(Element {
        tag: tag.into(),
        attrs,
        content,
    })))
}

fn attrs_from_json(value: Option<&Value>) -> HtmlResult<Attrs> {
    match value {
        None | Some(Value::Null) => Ok(Attrs::new()),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, value)| {
                Ok((
                    CompactString::from(name.as_str()),
                    attr_value_from_json(value)?,
                ))
            })
            .collect(),
        Some(other) => Err(HtmlError::type_mismatch(json_type_name(other))),
    }
}

fn attr_value_from_json(value: &Value) -> HtmlResult<AttrValue> {
    match value {
        Value::Array(items) => Ok(AttrValue::List(
            items.iter().map(scalar_from_json).collect::<HtmlResult<Vec<_>>>()?,
        )),
        other => Ok(AttrValue::Scalar(scalar_from_json(other)?)),
    }
}

fn scalar_from_json(value: &Value) -> HtmlResult<Scalar> {
    match value {
        Value::Null => Ok(Scalar::Null),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or_default()),
        }),
        Value::String(s) => Ok(Scalar::Str(s.clone())),
        Value::Array(_) | Value::Object(_) => {
            Err(HtmlError::type_mismatch(json_type_name(value)))
        }
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Build a markup tree from a JSON value.
///
/// Attribute insertion order is preserved into rendering order.
pub fn from_json(value: &Value) -> HtmlResult<Node> {
    node_from_json(value)
}

/// Convert a JSON value straight to its HTML string.
pub fn json_to_html(value: &Value) -> HtmlResult<String> {
    Ok(render::render(&from_json(value)?))
}

// =============================================================================
// Tests
// =============================================================================
