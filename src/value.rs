//! Dynamic scalar values.
//!
//! Callers of this crate pass loosely-typed data: strings, numbers, booleans,
//! and nulls all end up as attribute values or text content. [`Scalar`] is the
//! closed set of those runtime types together with the canonical text and
//! HTML coercions.
//!
//! # Coercion rules
//!
//! - Strings pass through (`to_text`) or get escaped (`to_html`).
//! - Integers and floats format in decimal; integral floats drop the
//!   fractional part (`2.0` becomes `"2"`).
//! - `true` becomes `"1"`, `false` becomes `"0"`.
//! - Null becomes the empty string.

use std::fmt;

use crate::escape;

/// A loosely-typed scalar value with a defined HTML text form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    /// A string value
    Str(String),
    /// A signed integer value
    Int(i64),
    /// A floating point value
    Float(f64),
    /// A boolean value
    Bool(bool),
    /// The absent value
    #[default]
    Null,
}

impl Scalar {
    /// Plain text form, without any escaping.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// HTML-safe text form: the string case is escaped, the other cases
    /// cannot contain markup-significant characters.
    pub fn to_html(&self) -> String {
        match self {
            Scalar::Str(s) => escape::escape_html(s),
            other => other.to_text(),
        }
    }

    /// Append the HTML-safe text form to `out`.
    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Scalar::Str(s) => escape::escape_into(s, out),
            other => out.push_str(&other.to_text()),
        }
    }

    /// Loose truthiness: `""`, `"0"`, `0`, `0.0`, `false`, and null are
    /// falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Str(s) => !s.is_empty() && s.as_str() != "0",
            Scalar::Int(n) => *n != 0,
            Scalar::Float(x) => *x != 0.0,
            Scalar::Bool(b) => *b,
            Scalar::Null => false,
        }
    }

    /// Check if this is the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Get the string content, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => f.write_str("0"),
            Scalar::Null => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Scalar::Null,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        assert_eq!(Scalar::from("hello").to_text(), "hello");
        assert_eq!(Scalar::from("").to_text(), "");
        assert_eq!(Scalar::from(123).to_text(), "123");
        assert_eq!(Scalar::from(-7).to_text(), "-7");
        assert_eq!(Scalar::from(2.5).to_text(), "2.5");
        assert_eq!(Scalar::from(2.0).to_text(), "2");
        assert_eq!(Scalar::from(true).to_text(), "1");
        assert_eq!(Scalar::from(false).to_text(), "0");
        assert_eq!(Scalar::Null.to_text(), "");
    }

    #[test]
    fn test_to_html_escapes_strings_only() {
        assert_eq!(Scalar::from("helper & html").to_html(), "helper &amp; html");
        assert_eq!(Scalar::from("<b>").to_html(), "&lt;b&gt;");
        assert_eq!(Scalar::from(123).to_html(), "123");
        assert_eq!(Scalar::from(false).to_html(), "0");
        assert_eq!(Scalar::Null.to_html(), "");
    }

    #[test]
    fn test_is_truthy() {
        assert!(Scalar::from("hello").is_truthy());
        assert!(Scalar::from("0.0").is_truthy());
        assert!(Scalar::from(1).is_truthy());
        assert!(Scalar::from(-1).is_truthy());
        assert!(Scalar::from(0.5).is_truthy());
        assert!(Scalar::from(true).is_truthy());

        assert!(!Scalar::from("").is_truthy());
        assert!(!Scalar::from("0").is_truthy());
        assert!(!Scalar::from(0).is_truthy());
        assert!(!Scalar::from(0.0).is_truthy());
        assert!(!Scalar::from(false).is_truthy());
        assert!(!Scalar::Null.is_truthy());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Scalar::from(None::<&str>), Scalar::Null);
        assert_eq!(Scalar::from(Some("x")), Scalar::from("x"));
        assert_eq!(Scalar::from(Some(3)), Scalar::Int(3));
    }

    #[test]
    fn test_default_is_null() {
        assert!(Scalar::default().is_null());
        assert_eq!(Scalar::default().as_str(), None);
        assert_eq!(Scalar::from("x").as_str(), Some("x"));
    }
}
