//! HTML escaping.
//!
//! One escaper for both text content and attribute values, covering the five
//! markup-significant characters. The apostrophe uses the numeric form
//! `&#039;` so the output is safe inside single-quoted attributes as well.
//!
//! Escaping is deliberately not idempotent: already-escaped input gets its
//! ampersands escaped again. Callers that hold pre-escaped markup use the raw
//! paths instead of escaping twice.

/// Escape `&` `<` `>` `"` `'` for safe inclusion in HTML output.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    escape_into(text, &mut escaped);
    escaped
}

/// Append the escaped form of `text` to `out`.
pub(crate) fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
