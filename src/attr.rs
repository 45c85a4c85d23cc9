//! Attribute system for HTML elements.
//!
//! Attributes are ordered `(name, value)` pairs; insertion order is rendering
//! order. Values are [`Scalar`]s or lists of scalars, and how a pair renders
//! depends on the attribute NAME: boolean flags, tri-state toggles, the class
//! list, and plain attributes each follow their own rule (see [`AttrKind`]).

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::escape;
use crate::value::Scalar;

// =============================================================================
// Attribute values
// =============================================================================

/// An attribute value: a single scalar or a list of scalars.
///
/// Lists get the class-cleaning treatment on `class` and a plain space-join
/// on every other attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A single scalar value
    Scalar(Scalar),
    /// A list of scalar values
    List(Vec<Scalar>),
}

impl AttrValue {
    /// Loose truthiness: lists are truthy when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Scalar(s) => s.is_truthy(),
            AttrValue::List(items) => !items.is_empty(),
        }
    }

    /// Check if this is the null scalar.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Scalar(Scalar::Null))
    }

    /// Get the scalar, if this is not a list.
    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            AttrValue::Scalar(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }
}

impl From<Scalar> for AttrValue {
    fn from(value: Scalar) -> Self {
        AttrValue::Scalar(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Scalar(value.into())
    }
}

impl From<Vec<Scalar>> for AttrValue {
    fn from(value: Vec<Scalar>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(Scalar::from).collect())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value.into_iter().map(Scalar::from).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(value: &[&str]) -> Self {
        AttrValue::List(value.iter().map(|s| Scalar::from(*s)).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => AttrValue::Scalar(Scalar::Null),
        }
    }
}

// =============================================================================
// Attribute collections
// =============================================================================

/// Ordered element attributes as name-value pairs.
///
/// Most elements carry only a handful of attributes, so the pairs live
/// inline.
pub type Attrs = SmallVec<[(CompactString, AttrValue); 4]>;

/// Extension trait for attribute operations on [`Attrs`].
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&AttrValue>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update, keeping position)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<AttrValue>;

    /// Append a class, converting an existing scalar `class` into a list.
    /// Null and empty-string classes are ignored.
    fn add_class(&mut self, class: impl Into<Scalar>);

    /// Remove a class: list entries by text form, or space-separated words
    /// of a scalar string `class`.
    fn remove_class(&mut self, class: &str);

    /// Remove the `class` attribute entirely
    fn clear_class(&mut self);

    /// Set a `data-` attribute: `set_data("size", 5)` sets `data-size`
    fn set_data(&mut self, name: &str, value: impl Into<AttrValue>);

    /// Set an internal attribute the flat tag helpers will not render.
    ///
    /// # Panics
    ///
    /// Panics when `name` does not start with an underscore; the underscore
    /// is what marks the attribute as internal.
    fn set_fake(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k.as_str() == name)
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| *k == name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.iter()
            .position(|(k, _)| k.as_str() == name)
            .map(|pos| self.remove(pos).1)
    }

    fn add_class(&mut self, class: impl Into<Scalar>) {
        let class = class.into();
        if class.is_null() || class.as_str() == Some("") {
            return;
        }
        if let Some((_, value)) = self.iter_mut().find(|(k, _)| k.as_str() == "class") {
            match value {
                AttrValue::List(items) => items.push(class),
                AttrValue::Scalar(existing) => {
                    let first = std::mem::take(existing);
                    *value = AttrValue::List(vec![first, class]);
                }
            }
        } else {
            self.push((CompactString::const_new("class"), AttrValue::List(vec![class])));
        }
    }

    fn remove_class(&mut self, class: &str) {
        let Some((_, value)) = self.iter_mut().find(|(k, _)| k.as_str() == "class") else {
            return;
        };
        match value {
            AttrValue::List(items) => items.retain(|item| item.to_text() != class),
            AttrValue::Scalar(Scalar::Str(s)) => {
                let rebuilt = s
                    .split(' ')
                    .filter(|word| *word != class)
                    .collect::<Vec<_>>()
                    .join(" ");
                *s = rebuilt;
            }
            AttrValue::Scalar(_) => {}
        }
    }

    fn clear_class(&mut self) {
        self.remove_attr("class");
    }

    fn set_data(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.set_attr(format!("data-{name}"), value);
    }

    fn set_fake(&mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) {
        let name = name.into();
        assert!(
            name.starts_with('_'),
            "fake attribute name must start with an underscore: {name}"
        );
        self.set_attr(name, value);
    }
}

// =============================================================================
// Rendering rules
// =============================================================================

/// Rendering rule families, keyed by attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Boolean attribute: truthy renders ` name="name"`, falsy renders nothing
    Flag,
    /// Enumerated attribute: null renders nothing, any other value renders
    /// one of two fixed words
    Toggle {
        /// Word for truthy values
        on: &'static str,
        /// Word for falsy values
        off: &'static str,
        /// Whether the literal strings `"auto"` and `"false"` pass through
        /// (the `draggable` rule)
        auto: bool,
    },
    /// The `class` attribute: list values are escaped, cleaned, sorted,
    /// and deduplicated
    ClassList,
    /// Any other attribute: null and the empty string render nothing
    Plain,
}

/// Classify an attribute name into its rendering rule.
pub fn attr_kind(name: &str) -> AttrKind {
    match name {
        "autofocus" | "checked" | "disabled" | "hidden" | "ismap" | "multiple"
        | "novalidate" | "readonly" | "required" | "selected" | "spellcheck" => AttrKind::Flag,
        "draggable" => AttrKind::Toggle { on: "true", off: "false", auto: true },
        "contenteditable" => AttrKind::Toggle { on: "true", off: "false", auto: false },
        "autocomplete" => AttrKind::Toggle { on: "on", off: "off", auto: false },
        "translate" => AttrKind::Toggle { on: "yes", off: "no", auto: false },
        "class" => AttrKind::ClassList,
        _ => AttrKind::Plain,
    }
}

/// Render one attribute according to its name's rule, appending ` name="..."`
/// (with the leading space) to `out`, or nothing at all.
///
/// Never fails: list values on non-class attributes are coerced to a
/// space-joined string rather than rejected.
pub fn render_attr(name: &str, value: &AttrValue, out: &mut String) {
    match attr_kind(name) {
        AttrKind::Flag => {
            if value.is_truthy() {
                push_attr(name, name, out);
            }
        }
        AttrKind::Toggle { on, off, auto } => {
            if value.is_null() {
                return;
            }
            let text = value.as_scalar().and_then(Scalar::as_str);
            let word = if auto && text == Some("auto") {
                "auto"
            } else if auto && (!value.is_truthy() || text == Some("false")) {
                off
            } else if value.is_truthy() {
                on
            } else {
                off
            };
            push_attr(name, word, out);
        }
        AttrKind::ClassList => match value {
            AttrValue::List(items) => {
                let classes = clean_classes(items);
                if !classes.is_empty() {
                    // Historical quirk, kept intact: the entries were already
                    // escaped by the cleaning step, and the joined string is
                    // escaped once more on output.
                    out.push_str(" class=\"");
                    escape::escape_into(&classes.join(" "), out);
                    out.push('"');
                }
            }
            // A scalar class follows the plain rule.
            AttrValue::Scalar(_) => render_plain(name, value, out),
        },
        AttrKind::Plain => render_plain(name, value, out),
    }
}

/// Escape each class to its HTML text, drop empties, sort, and deduplicate.
pub fn clean_classes(classes: &[Scalar]) -> Vec<String> {
    let mut cleaned: Vec<String> = classes
        .iter()
        .map(Scalar::to_html)
        .filter(|c| !c.is_empty())
        .collect();
    cleaned.sort();
    cleaned.dedup();
    cleaned
}

fn render_plain(name: &str, value: &AttrValue, out: &mut String) {
    match value {
        AttrValue::Scalar(scalar) => {
            if scalar.is_null() || scalar.as_str() == Some("") {
                return;
            }
            out.push(' ');
            escape::escape_into(name, out);
            out.push_str("=\"");
            scalar.write_html(out);
            out.push('"');
        }
        AttrValue::List(items) => {
            let joined = items
                .iter()
                .map(Scalar::to_html)
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !joined.is_empty() {
                out.push(' ');
                escape::escape_into(name, out);
                out.push_str("=\"");
                out.push_str(&joined);
                out.push('"');
            }
        }
    }
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(name: &str, value: impl Into<AttrValue>) -> String {
        let mut out = String::new();
        render_attr(name, &value.into(), &mut out);
        out
    }

    #[test]
    fn test_attrs_operations() {
        let mut attrs = Attrs::new();

        attrs.set_attr("id", "main");
        attrs.set_attr("class", "container");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("id"), Some(&AttrValue::from("main")));
        assert_eq!(attrs.get_attr("href"), None);
        assert!(attrs.has_attr("id"));
        assert!(!attrs.has_attr("href"));

        // Update keeps the original position.
        attrs.set_attr("id", "other");
        assert_eq!(attrs.get_attr("id"), Some(&AttrValue::from("other")));
        assert_eq!(attrs[0].0.as_str(), "id");
        assert_eq!(attrs.len(), 2);

        let removed = attrs.remove_attr("id");
        assert_eq!(removed, Some(AttrValue::from("other")));
        assert!(!attrs.has_attr("id"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_add_class() {
        let mut attrs = Attrs::new();

        attrs.add_class("");
        attrs.add_class(Scalar::Null);
        assert!(!attrs.has_attr("class"));

        attrs.add_class("hello");
        attrs.add_class("world");
        assert_eq!(
            attrs.get_attr("class"),
            Some(&AttrValue::from(vec!["hello", "world"]))
        );

        // A scalar class becomes a two-entry list.
        let mut attrs = Attrs::new();
        attrs.set_attr("class", "base");
        attrs.add_class("extra");
        assert_eq!(
            attrs.get_attr("class"),
            Some(&AttrValue::from(vec!["base", "extra"]))
        );
    }

    #[test]
    fn test_remove_class() {
        let mut attrs = Attrs::new();
        attrs.set_attr("class", vec!["one", "two", "one"]);
        attrs.remove_class("one");
        assert_eq!(attrs.get_attr("class"), Some(&AttrValue::from(vec!["two"])));

        let mut attrs = Attrs::new();
        attrs.set_attr("class", "foo bar baz");
        attrs.remove_class("bar");
        assert_eq!(attrs.get_attr("class"), Some(&AttrValue::from("foo baz")));

        attrs.clear_class();
        assert!(!attrs.has_attr("class"));
    }

    #[test]
    fn test_set_data_and_fake() {
        let mut attrs = Attrs::new();
        attrs.set_data("size", 5);
        assert_eq!(attrs.get_attr("data-size"), Some(&AttrValue::from(5)));

        attrs.set_fake("_state", "open");
        assert_eq!(attrs.get_attr("_state"), Some(&AttrValue::from("open")));
    }

    #[test]
    #[should_panic(expected = "must start with an underscore")]
    fn test_set_fake_requires_underscore() {
        let mut attrs = Attrs::new();
        attrs.set_fake("not_fake", "x");
    }

    #[test]
    fn test_attr_kind_table() {
        assert_eq!(attr_kind("checked"), AttrKind::Flag);
        assert_eq!(attr_kind("spellcheck"), AttrKind::Flag);
        assert_eq!(
            attr_kind("draggable"),
            AttrKind::Toggle { on: "true", off: "false", auto: true }
        );
        assert_eq!(
            attr_kind("autocomplete"),
            AttrKind::Toggle { on: "on", off: "off", auto: false }
        );
        assert_eq!(attr_kind("class"), AttrKind::ClassList);
        assert_eq!(attr_kind("id"), AttrKind::Plain);
        assert_eq!(attr_kind("data-x"), AttrKind::Plain);
    }

    #[test]
    fn test_flag_attributes() {
        for truthy in [
            AttrValue::from("1"),
            AttrValue::from(1),
            AttrValue::from(true),
            AttrValue::from("hello, world"),
            AttrValue::from(vec!["hello, world"]),
        ] {
            let mut out = String::new();
            render_attr("checked", &truthy, &mut out);
            assert_eq!(out, r#" checked="checked""#, "for {truthy:?}");
        }
        for falsy in [
            AttrValue::from("0"),
            AttrValue::from(0),
            AttrValue::from(false),
            AttrValue::from(Vec::<Scalar>::new()),
            AttrValue::from(""),
            AttrValue::Scalar(Scalar::Null),
        ] {
            let mut out = String::new();
            render_attr("checked", &falsy, &mut out);
            assert_eq!(out, "", "for {falsy:?}");
        }
    }

    #[test]
    fn test_draggable() {
        assert_eq!(rendered("draggable", true), r#" draggable="true""#);
        assert_eq!(rendered("draggable", 1), r#" draggable="true""#);
        assert_eq!(rendered("draggable", vec!["x"]), r#" draggable="true""#);
        assert_eq!(rendered("draggable", false), r#" draggable="false""#);
        assert_eq!(rendered("draggable", "0"), r#" draggable="false""#);
        assert_eq!(rendered("draggable", ""), r#" draggable="false""#);
        assert_eq!(rendered("draggable", Vec::<Scalar>::new()), r#" draggable="false""#);
        assert_eq!(rendered("draggable", "auto"), r#" draggable="auto""#);
        // The string "false" maps to the off word even though it is truthy.
        assert_eq!(rendered("draggable", "false"), r#" draggable="false""#);
        assert_eq!(rendered("draggable", Scalar::Null), "");
    }

    #[test]
    fn test_two_word_toggles() {
        assert_eq!(rendered("contenteditable", true), r#" contenteditable="true""#);
        assert_eq!(rendered("contenteditable", 0), r#" contenteditable="false""#);
        assert_eq!(rendered("contenteditable", Scalar::Null), "");
        // Only draggable special-cases the string "false".
        assert_eq!(rendered("contenteditable", "false"), r#" contenteditable="true""#);

        assert_eq!(rendered("autocomplete", "1"), r#" autocomplete="on""#);
        assert_eq!(rendered("autocomplete", ""), r#" autocomplete="off""#);
        assert_eq!(rendered("autocomplete", Scalar::Null), "");

        assert_eq!(rendered("translate", true), r#" translate="yes""#);
        assert_eq!(rendered("translate", false), r#" translate="no""#);
        assert_eq!(rendered("translate", Scalar::Null), "");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(rendered("class", Vec::<Scalar>::new()), "");
        assert_eq!(rendered("class", vec!["hello", "world"]), r#" class="hello world""#);

        // Empties drop, entries dedupe and sort, false coerces to "0".
        let messy = AttrValue::List(vec![
            Scalar::from("hello"),
            Scalar::from("hello"),
            Scalar::from(""),
            Scalar::Null,
            Scalar::from("world"),
            Scalar::from(false),
        ]);
        let mut out = String::new();
        render_attr("class", &messy, &mut out);
        assert_eq!(out, r#" class="0 hello world""#);
    }

    #[test]
    fn test_class_list_double_escapes() {
        assert_eq!(rendered("class", vec!["a&b"]), r#" class="a&amp;amp;b""#);
    }

    #[test]
    fn test_class_scalar_uses_plain_rule() {
        assert_eq!(rendered("class", ""), "");
        assert_eq!(rendered("class", Scalar::Null), "");
        assert_eq!(rendered("class", false), r#" class="0""#);
        assert_eq!(rendered("class", "x y"), r#" class="x y""#);
    }

    #[test]
    fn test_plain_attributes() {
        assert_eq!(rendered("id", "main"), r#" id="main""#);
        assert_eq!(rendered("data-test", Scalar::Null), "");
        assert_eq!(rendered("data-test", ""), "");
        assert_eq!(rendered("data-test", "0"), r#" data-test="0""#);
        assert_eq!(rendered("data-test", 0), r#" data-test="0""#);
        assert_eq!(rendered("data-test", false), r#" data-test="0""#);
    }

    #[test]
    fn test_plain_attribute_names_are_escaped() {
        assert_eq!(
            rendered("qwerty&?<", "<a>&"),
            r#" qwerty&amp;?&lt;="&lt;a&gt;&amp;""#
        );
    }

    #[test]
    fn test_plain_list_coerces() {
        // No sort, no dedupe, single escape; empties still drop.
        assert_eq!(rendered("rel", vec!["b", "", "a", "b"]), r#" rel="b a b""#);
        assert_eq!(rendered("rel", vec!["a&b"]), r#" rel="a&amp;b""#);
        assert_eq!(rendered("rel", Vec::<Scalar>::new()), "");
    }
}
