//! htmlkit - HTML generation from dynamic, loosely-typed values
//!
//! ## Core Concepts
//!
//! **Markup trees**: [`Node`], [`Element`], and [`Content`] form a tagged
//! tree in which malformed markup is unrepresentable, so rendering never
//! fails. Loosely-typed input is validated once, at the [`convert`]
//! boundary.
//!
//! **Name-driven attributes**: how an attribute renders depends on its NAME:
//! boolean flags render as ` checked="checked"` or not at all, tri-state
//! toggles render fixed word pairs, `class` lists are cleaned and sorted,
//! and everything else renders escaped name/value pairs (see
//! [`attr::AttrKind`]).
//!
//! ## Modules
//! - `node`: tree types (`Node`, `Element`, `Content`)
//! - `attr`: attribute values, collections, and rendering rules
//! - `render`: nested tree rendering and the flat tag API
//! - `value`: the `Scalar` dynamic value type
//! - `escape`, `slug`, `id`, `walker`: text and identity utilities
//! - `convert`: loosely-typed input converters (JSON)
//!
//! ## Usage
//!
//! ```
//! use htmlkit::{Element, Node, render};
//!
//! let page = Node::from(vec![
//!     Element::new("h1").with_class("title").text("Overview").into(),
//!     Element::new("hr").into(),
//! ]);
//! assert_eq!(render(&page), r#"<h1 class="title">Overview</h1><hr/>"#);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Dynamic scalar values
pub mod value;

/// Attribute system
pub mod attr;

/// Node types: Node, Element, Content
pub mod node;

/// HTML escaping
pub mod escape;

/// HTML rendering
pub mod render;

/// URL slug generation
pub mod slug;

/// Auto-incrementing element IDs
pub mod id;

/// CSS module class lists
pub mod walker;

/// Input converters
pub mod convert;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Content, Element, Node};

// Scalar values
pub use value::Scalar;

// Attribute types
pub use attr::{AttrKind, AttrValue, Attrs, AttrsExt};

// Rendering
pub use render::{element, element_html, is_void_tag, render, render_into, start_tag, void_tag};

// Utilities
pub use escape::escape_html;
pub use id::{IdGenerator, auto_id};
pub use slug::slugify;
pub use walker::ClassWalker;

// Error types
pub use error::{HtmlError, HtmlResult};

// Converters
#[cfg(feature = "json")]
pub use convert::{from_json, json_to_html};

// =============================================================================
// Tests
// =============================================================================
