//! Per-element class lists for CSS modules.
//!
//! Components that scope their CSS under a module name need the same class
//! pattern on every element they emit: the module class, an optional
//! sub-module class, and `module-part` classes for the element's role.
//! [`ClassWalker`] carries the module names and produces those lists.

/// Builder of per-element class lists for a CSS module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassWalker {
    module_class: String,
    sub_module_class: Option<String>,
}

impl ClassWalker {
    /// Create a walker for a module class
    pub fn new(module_class: impl Into<String>) -> Self {
        Self {
            module_class: module_class.into(),
            sub_module_class: None,
        }
    }

    /// Set the sub-module class, consuming and returning the walker
    pub fn with_sub_module_class(mut self, sub_module_class: impl Into<String>) -> Self {
        self.sub_module_class = Some(sub_module_class.into());
        self
    }

    /// Get the module class
    pub fn module_class(&self) -> &str {
        &self.module_class
    }

    /// Get the sub-module class
    pub fn sub_module_class(&self) -> Option<&str> {
        self.sub_module_class.as_deref()
    }

    /// Replace the module class
    pub fn set_module_class(&mut self, module_class: impl Into<String>) -> &mut Self {
        self.module_class = module_class.into();
        self
    }

    /// Replace or clear the sub-module class
    pub fn set_sub_module_class(&mut self, sub_module_class: Option<&str>) -> &mut Self {
        self.sub_module_class = sub_module_class.map(String::from);
        self
    }

    /// Class list for one element, in order: the module class, the
    /// sub-module class if set, `module-sub` for each entry of
    /// `sub_classes`, then the `additional` classes verbatim.
    pub fn classes(&self, sub_classes: &[&str], additional: &[&str]) -> Vec<String> {
        let mut classes = Vec::with_capacity(2 + sub_classes.len() + additional.len());
        classes.push(self.module_class.clone());
        if let Some(sub) = &self.sub_module_class {
            classes.push(sub.clone());
        }
        for sub in sub_classes {
            classes.push(format!("{}-{}", self.module_class, sub));
        }
        for class in additional {
            classes.push((*class).to_string());
        }
        classes
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_class_only() {
        let walker = ClassWalker::new("foo");
        assert_eq!(walker.classes(&[], &[]), vec!["foo"]);
        assert_eq!(walker.classes(&["eggs"], &[]), vec!["foo", "foo-eggs"]);
        assert_eq!(
            walker.classes(&["eggs", "spam"], &[]),
            vec!["foo", "foo-eggs", "foo-spam"]
        );
        assert_eq!(
            walker.classes(&["eggs"], &["is-test"]),
            vec!["foo", "foo-eggs", "is-test"]
        );
        assert_eq!(
            walker.classes(&["eggs", "spam"], &["is-test", "is-unit"]),
            vec!["foo", "foo-eggs", "foo-spam", "is-test", "is-unit"]
        );
    }

    #[test]
    fn test_sub_module_class_comes_second() {
        let walker = ClassWalker::new("foo").with_sub_module_class("bar");
        assert_eq!(walker.classes(&[], &[]), vec!["foo", "bar"]);
        assert_eq!(
            walker.classes(&["eggs"], &["is-test"]),
            vec!["foo", "bar", "foo-eggs", "is-test"]
        );
    }

    #[test]
    fn test_setters_and_getters() {
        let mut walker = ClassWalker::new("foo");
        assert_eq!(walker.module_class(), "foo");
        assert_eq!(walker.sub_module_class(), None);

        walker.set_module_class("frm").set_sub_module_class(Some("login"));
        assert_eq!(walker.module_class(), "frm");
        assert_eq!(walker.sub_module_class(), Some("login"));
        assert_eq!(walker.classes(&["field"], &[]), vec!["frm", "login", "frm-field"]);

        walker.set_sub_module_class(None);
        assert_eq!(walker.sub_module_class(), None);
        assert_eq!(walker.classes(&[], &[]), vec!["frm"]);
    }
}
