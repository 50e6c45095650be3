//! Page tree
//!
//! Arena-backed element tree rooted at a synthetic `body` element. Nodes are
//! only ever appended, so a `NodeId` handed out by a page stays valid for the
//! page's lifetime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::PageError;
use crate::Result;

/// Handle to a node within a `Page`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    /// Index of element ids, kept unique
    ids: HashMap<String, NodeId>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
            ids: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element under `parent`
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId> {
        if let Some(id) = element.id() {
            if self.ids.contains_key(id) {
                tracing::debug!(id = %id, "Rejected element with duplicate id");
                return Err(PageError::DuplicateId(id.to_string()));
            }
        }

        let node_id = NodeId(self.nodes.len());
        if let Some(id) = element.id() {
            self.ids.insert(id.to_string(), node_id);
        }

        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(node_id);

        Ok(node_id)
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0].element
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0].element
    }

    /// Look up a node by its element id
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// First node in document order carrying `class`
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.element(*node).has_class(class))
    }

    /// All nodes under `ancestor` in document (preorder) order, excluding
    /// `ancestor` itself
    pub fn descendants(&self, ancestor: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[ancestor.0]
            .children
            .iter()
            .rev()
            .copied()
            .collect();

        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }

        out
    }

    /// Whether `node` sits strictly below `ancestor`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent.0].parent;
        }
        false
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> (Page, NodeId, NodeId, NodeId) {
        let mut page = Page::new();
        let sidebar = page
            .append(page.root(), Element::new("div").with_class("sidebar"))
            .unwrap();
        let a = page
            .append(
                sidebar,
                Element::new("a").with_attr("data-content", "/a.html"),
            )
            .unwrap();
        let frame = page
            .append(page.root(), Element::new("iframe").with_id("content-frame"))
            .unwrap();
        (page, sidebar, a, frame)
    }

    #[test]
    fn test_by_id() {
        let (page, _, _, frame) = sample_page();
        assert_eq!(page.by_id("content-frame"), Some(frame));
        assert_eq!(page.by_id("missing"), None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut page = Page::new();
        page.append(page.root(), Element::new("nav").with_id("api-test-nav"))
            .unwrap();
        let result = page.append(page.root(), Element::new("nav").with_id("api-test-nav"));
        assert!(matches!(result, Err(PageError::DuplicateId(_))));
    }

    #[test]
    fn test_first_by_class_document_order() {
        let mut page = Page::new();
        let first = page
            .append(page.root(), Element::new("div").with_class("sidebar"))
            .unwrap();
        page.append(page.root(), Element::new("div").with_class("sidebar"))
            .unwrap();
        assert_eq!(page.first_by_class("sidebar"), Some(first));
        assert_eq!(page.first_by_class("toolbar"), None);
    }

    #[test]
    fn test_descendants_preorder() {
        let mut page = Page::new();
        let sidebar = page
            .append(page.root(), Element::new("div").with_class("sidebar"))
            .unwrap();
        let section = page.append(sidebar, Element::new("ul")).unwrap();
        let a = page.append(section, Element::new("a")).unwrap();
        let b = page.append(sidebar, Element::new("a")).unwrap();

        assert_eq!(page.descendants(sidebar), vec![section, a, b]);
    }

    #[test]
    fn test_contains() {
        let (page, sidebar, a, frame) = sample_page();
        assert!(page.contains(sidebar, a));
        assert!(page.contains(page.root(), a));
        assert!(!page.contains(sidebar, frame));
        assert!(!page.contains(sidebar, sidebar));
    }
}
