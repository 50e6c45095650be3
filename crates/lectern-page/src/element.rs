//! Element data structure
//!
//! An element carries the handful of facets the navigation layer cares
//! about: tag name, optional id, class list, attributes, and inline style.

use std::collections::{BTreeMap, BTreeSet};

/// Inline style property controlling visibility.
const DISPLAY: &str = "display";

/// Value that removes an element from layout.
const DISPLAY_NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as written in the markup
    tag: String,
    /// Stable identifier, unique within a page
    id: Option<String>,
    /// Class list (unordered, no duplicates)
    classes: BTreeSet<String>,
    /// Attribute map
    attrs: BTreeMap<String, String>,
    /// Inline style map
    style: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Tag comparison is case-insensitive, matching markup conventions
    pub fn is_anchor(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class (idempotent)
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove a class (idempotent)
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Remove the element from layout
    pub fn hide(&mut self) {
        self.style.insert(DISPLAY.to_string(), DISPLAY_NONE.to_string());
    }

    pub fn is_hidden(&self) -> bool {
        self.style.get(DISPLAY).map(String::as_str) == Some(DISPLAY_NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_detection() {
        assert!(Element::new("a").is_anchor());
        assert!(Element::new("A").is_anchor());
        assert!(!Element::new("span").is_anchor());
    }

    #[test]
    fn test_class_ops_idempotent() {
        let mut el = Element::new("a").with_class("active");
        assert!(el.has_class("active"));

        // Adding again leaves a single entry
        el.add_class("active");
        assert!(el.has_class("active"));

        el.remove_class("active");
        assert!(!el.has_class("active"));

        // Removing a missing class is a no-op
        el.remove_class("active");
        assert!(!el.has_class("active"));
    }

    #[test]
    fn test_hide_is_sticky() {
        let mut el = Element::new("li").with_id("api-test-nav");
        assert!(!el.is_hidden());

        el.hide();
        assert!(el.is_hidden());

        // Hiding twice stays hidden
        el.hide();
        assert!(el.is_hidden());
        assert_eq!(el.style("display"), Some("none"));
    }

    #[test]
    fn test_attrs() {
        let mut el = Element::new("a").with_attr("data-content", "/a.html");
        assert_eq!(el.attr("data-content"), Some("/a.html"));
        assert_eq!(el.attr("href"), None);

        el.set_attr("data-content", "/b.html");
        assert_eq!(el.attr("data-content"), Some("/b.html"));
    }
}
