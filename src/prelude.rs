//! Prelude module for common imports.
//!
//! ```ignore
//! use htmlkit::prelude::*;
//! ```

// Node types
pub use crate::node::{Content, Element, Node};

// Scalar values
pub use crate::value::Scalar;

// Attributes
pub use crate::attr::{AttrKind, AttrValue, Attrs, AttrsExt, attr_kind, render_attr};

// Rendering
pub use crate::render::{
    element, element_html, is_void_tag, render, render_into, start_tag, void_tag,
};

// Escaping and slugs
pub use crate::escape::escape_html;
pub use crate::slug::slugify;

// Identity
pub use crate::id::{ID_PREFIX, IdGenerator, auto_id};

// CSS class lists
pub use crate::walker::ClassWalker;

// Error
pub use crate::error::{HtmlError, HtmlResult};

// Converters
#[cfg(feature = "json")]
pub use crate::convert::{from_json, json_to_html};
