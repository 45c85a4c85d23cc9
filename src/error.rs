//! Error types for htmlkit.
//!
//! Markup generation itself is infallible; errors only arise when ingesting
//! loosely-typed input that cannot be mapped onto the tree model.

use thiserror::Error;

/// Errors that can occur while building markup from dynamic input.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// A runtime value of a type that has no HTML text form
    #[error("unsupported value type: {found}")]
    TypeMismatch {
        /// Name of the offending runtime type
        found: &'static str,
    },

    /// A record node that matches no recognized shape
    #[error("malformed markup structure: {reason}")]
    Structure {
        /// What the record was expected to look like
        reason: String,
    },
}

/// Result type alias for markup-building operations.
pub type HtmlResult<T> = Result<T, HtmlError>;

impl HtmlError {
    /// Create a type mismatch error naming the runtime type.
    pub fn type_mismatch(found: &'static str) -> Self {
        Self::TypeMismatch { found }
    }

    /// Create a structure error with a message.
    pub fn structure(reason: impl Into<String>) -> Self {
        Self::Structure { reason: reason.into() }
    }
}

// =============================================================================
// Tests
// =============================================================================
