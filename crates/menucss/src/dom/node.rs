//! Node types stored in a [`Document`](super::Document).
//!
//! Nodes never own each other directly. The document owns every node in a
//! flat arena and the tree is expressed through [`NodeId`] handles: a parent
//! lists its children by id, and a child records its parent by id. The parent
//! link is a lookup, never an ownership edge.

use std::collections::HashSet;
use std::fmt;

use crate::error::{MenuCssError, Result};

/// A handle to a node inside a [`Document`](super::Document).
///
/// Two structurally identical elements always have distinct ids, which makes
/// `NodeId` the identity key for computed styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) document: u32,
    pub(crate) index: u32,
}

impl NodeId {
    /// Position of the node in its document's arena (creation order).
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.document, self.index)
    }
}

/// The payload that distinguishes element and text nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element(Element),
    Text(TextNode),
}

/// A node slot in the document arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self { parent: None, kind }
    }

    /// The owning element, or `None` for a root or an unattached node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }
}

/// An element node, comparable to an HTML element.
///
/// The type is matched case-insensitively by type selectors, the id and the
/// classes case-sensitively. Children can only be appended through
/// [`Document::add`](super::Document::add), which keeps the parent links
/// consistent; this type only exposes them as a slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    type_name: String,
    id: Option<String>,
    classes: HashSet<String>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    /// Creates a detached element of the given type.
    ///
    /// Fails with [`MenuCssError::InvalidArgument`] if `type_name` is empty or
    /// only whitespace. The type is stored exactly as given.
    pub fn new(type_name: impl Into<String>) -> Result<Self> {
        let type_name = type_name.into();
        if type_name.trim().is_empty() {
            return Err(MenuCssError::InvalidArgument(
                "element type must be a non-empty string".to_string(),
            ));
        }
        Ok(Self::with_type(type_name))
    }

    /// Builds an element from a type already known to be valid.
    pub(crate) fn with_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: None,
            classes: HashSet::new(),
            children: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the element id. Uniqueness is not enforced.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Adds a class name. Returns `false` if the class was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        self.classes.insert(class.into())
    }

    /// Exact, case-sensitive class membership.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Iterates the class set in no particular order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Class names sorted alphabetically, for stable output.
    pub fn sorted_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.classes().collect();
        classes.sort_unstable();
        classes
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A leaf node holding immutable text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_rejects_blank_type() {
        assert!(matches!(
            Element::new(""),
            Err(MenuCssError::InvalidArgument(_))
        ));
        assert!(matches!(
            Element::new(" \t"),
            Err(MenuCssError::InvalidArgument(_))
        ));
    }

    #[test]
    fn element_preserves_type_case() {
        let element = Element::new("MenuBar").unwrap();
        assert_eq!(element.type_name(), "MenuBar");
    }

    #[test]
    fn classes_are_a_set() {
        let mut element = Element::new("div").unwrap();
        assert!(element.add_class("menu"));
        assert!(!element.add_class("menu"));
        assert!(element.add_class("Menu"));
        assert_eq!(element.sorted_classes(), vec!["Menu", "menu"]);
        assert!(element.has_class("menu"));
        assert!(!element.has_class("MENU"));
    }

    #[test]
    fn node_variant_accessors() {
        let node = Node::new(NodeKind::Text(TextNode::new("Quit")));
        assert!(!node.is_element());
        assert_eq!(node.as_text().map(TextNode::text), Some("Quit"));
        assert!(node.as_element().is_none());
        assert!(node.parent().is_none());
    }
}
