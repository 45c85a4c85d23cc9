//! Auto-incrementing element IDs.
//!
//! Form widgets and scripts need unique `id` attributes when the caller does
//! not supply one. [`IdGenerator`] hands them out from an atomic counter;
//! [`auto_id`] draws from a process-wide generator.
//!
//! Exact sequences are only guaranteed on a generator you construct
//! yourself: the global one is shared by everything in the process, so its
//! IDs are unique but their numbering depends on who asked first.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every generated ID.
pub const ID_PREFIX: &str = "htmlkit-id-";

// =============================================================================
// IdGenerator
// =============================================================================

/// Generator of unique element IDs
///
/// Thread-safe and cheap: one atomic counter, no locking. IDs read
/// `htmlkit-id-1`, `htmlkit-id-2`, ... in allocation order.
///
/// # Example
///
/// ```
/// use htmlkit::id::IdGenerator;
///
/// let ids = IdGenerator::new();
/// assert_eq!(ids.next_id(), "htmlkit-id-1");
/// assert_eq!(ids.next_id(), "htmlkit-id-2");
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose first ID is `htmlkit-id-1`
    pub const fn new() -> Self {
        Self { issued: AtomicU64::new(0) }
    }

    /// Generate the next ID
    pub fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{ID_PREFIX}{n}")
    }

    /// Number of IDs issued so far
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Reset the counter so the next ID is `htmlkit-id-1` again.
    ///
    /// Meant for test isolation. Resetting a generator that is still in use
    /// reissues IDs, so never reset one that produced IDs still in a page.
    pub fn reset(&self) {
        self.issued.store(0, Ordering::Relaxed);
    }
}

// =============================================================================
// Process-wide generator
// =============================================================================

static GLOBAL: IdGenerator = IdGenerator::new();

/// Generate a unique element ID from the process-wide generator.
pub fn auto_id() -> String {
    GLOBAL.next_id()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), "htmlkit-id-1");
        assert_eq!(ids.next_id(), "htmlkit-id-2");
        assert_eq!(ids.next_id(), "htmlkit-id-3");
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_reset() {
        let ids = IdGenerator::new();
        ids.next_id();
        ids.next_id();
        ids.reset();
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.next_id(), "htmlkit-id-1");
    }

    #[test]
    fn test_default_matches_new() {
        let ids = IdGenerator::default();
        assert_eq!(ids.next_id(), "htmlkit-id-1");
    }

    #[test]
    fn test_global_ids_are_unique() {
        // Other tests share the global generator, so only prefix and
        // uniqueness are checked here.
        let a = auto_id();
        let b = auto_id();
        assert!(a.starts_with(ID_PREFIX));
        assert!(b.starts_with(ID_PREFIX));
        assert_ne!(a, b);
    }
}
