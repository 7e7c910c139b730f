//! The node arena and the only operations that mutate tree structure.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::dom::node::{Element, Node, NodeId, NodeKind, TextNode};
use crate::error::{MenuCssError, Result};

static NEXT_DOCUMENT_ID: AtomicU32 = AtomicU32::new(0);

/// Owns every node of one or more UI trees.
///
/// Nodes are created detached and attached with [`Document::add`]. A node can
/// be attached at most once for its whole lifetime; there is no removal or
/// reparenting operation.
///
/// # Example
///
/// ```rust
/// use menucss::Document;
///
/// let mut doc = Document::new();
/// let menu = doc.create_element("div").unwrap();
/// let button = doc.create_element("button").unwrap();
/// doc.add(menu, &[button]).unwrap();
///
/// assert_eq!(doc.parent(button), Some(menu));
/// assert_eq!(doc.children(menu), &[button]);
/// ```
#[derive(Debug)]
pub struct Document {
    id: u32,
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    fn allocate(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId {
            document: self.id,
            index: self.nodes.len() as u32,
        };
        self.nodes.push(Node::new(kind));
        id
    }

    /// Creates a detached element. Fails if `type_name` is blank.
    pub fn create_element(&mut self, type_name: &str) -> Result<NodeId> {
        let element = Element::new(type_name)?;
        Ok(self.insert_element(element))
    }

    /// Moves a detached element into the arena.
    ///
    /// Any child handles carried by the value are dropped: children are only
    /// ever attached through [`Document::add`].
    pub fn insert_element(&mut self, mut element: Element) -> NodeId {
        element.children.clear();
        self.allocate(NodeKind::Element(element))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.allocate(NodeKind::Text(TextNode::new(text)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the handle was created by this document.
    pub fn contains(&self, id: NodeId) -> bool {
        id.document == self.id && id.index() < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.document != self.id {
            return None;
        }
        self.nodes.get(id.index())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or_else(|| foreign_node(id))
    }

    pub fn element(&self, id: NodeId) -> Result<&Element> {
        self.node(id)?
            .as_element()
            .ok_or_else(|| not_an_element(id))
    }

    /// Mutable access to an element's id and classes.
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        if !self.contains(id) {
            return Err(foreign_node(id));
        }
        match &mut self.nodes[id.index()].kind {
            NodeKind::Element(element) => Ok(element),
            NodeKind::Text(_) => Err(not_an_element(id)),
        }
    }

    pub fn text_node(&self, id: NodeId) -> Result<&TextNode> {
        self.node(id)?.as_text().ok_or_else(|| {
            MenuCssError::InvalidArgument(format!("node {id} is not a text node"))
        })
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of an element in insertion order. Empty for text nodes and
    /// unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id)
            .and_then(Node::as_element)
            .map(Element::children)
            .unwrap_or(&[])
    }

    /// Attaches `children` to `parent` in argument order and returns `parent`
    /// so calls can be chained.
    ///
    /// The call is atomic: every argument is validated before anything is
    /// attached. It fails with [`MenuCssError::InvalidState`] if a child
    /// already has a parent, appears twice in `children`, or is `parent`
    /// itself or one of its ancestors. It fails with
    /// [`MenuCssError::InvalidArgument`] if `parent` is not an element or any
    /// handle belongs to another document.
    pub fn add(&mut self, parent: NodeId, children: &[NodeId]) -> Result<NodeId> {
        self.element(parent)?;
        let lineage = self.ancestors_inclusive(parent);

        for (position, &child) in children.iter().enumerate() {
            let node = self.node(child)?;
            if node.parent.is_some() {
                return Err(MenuCssError::InvalidState(format!(
                    "node {child} already has a parent"
                )));
            }
            if children[..position].contains(&child) {
                return Err(MenuCssError::InvalidState(format!(
                    "node {child} appears more than once in the same add"
                )));
            }
            if lineage.contains(&child) {
                return Err(MenuCssError::InvalidState(format!(
                    "adding node {child} under {parent} would create a cycle"
                )));
            }
        }

        self.attach(parent, children);
        log::trace!("DOM: attached {} node(s) to {}", children.len(), parent);
        Ok(parent)
    }

    /// Links already-validated children under `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, children: &[NodeId]) {
        for &child in children {
            self.nodes[child.index()].parent = Some(parent);
        }
        if let NodeKind::Element(element) = &mut self.nodes[parent.index()].kind {
            element.children.extend_from_slice(children);
        }
    }

    /// `id` followed by its parent, grandparent and so on up to the root.
    pub fn ancestors_inclusive(&self, id: NodeId) -> Vec<NodeId> {
        let mut lineage = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            lineage.push(node);
            current = self.parent(node);
        }
        lineage
    }

    /// Pre-order walk of every node below and including `root`.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let stack = if self.contains(root) { vec![root] } else { Vec::new() };
        Descendants { doc: self, stack }
    }

    /// Pre-order walk of the elements below and including `root`, skipping
    /// text nodes.
    pub fn elements(&self, root: NodeId) -> impl Iterator<Item = (NodeId, &Element)> {
        self.descendants(root)
            .filter_map(|id| self.get(id)?.as_element().map(|element| (id, element)))
    }
}

/// Iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

fn foreign_node(id: NodeId) -> MenuCssError {
    MenuCssError::InvalidArgument(format!("node {id} does not belong to this document"))
}

fn not_an_element(id: NodeId) -> MenuCssError {
    MenuCssError::InvalidArgument(format!("node {id} is not an element"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sets_parent_and_appends_in_order() {
        let mut doc = Document::new();
        let menu = doc.create_element("div").unwrap();
        let start = doc.create_element("button").unwrap();
        let quit = doc.create_element("button").unwrap();

        let returned = doc.add(menu, &[start, quit]).unwrap();

        assert_eq!(returned, menu);
        assert_eq!(doc.children(menu), &[start, quit]);
        assert_eq!(doc.parent(start), Some(menu));
        assert_eq!(doc.parent(quit), Some(menu));
        assert_eq!(doc.parent(menu), None);
    }

    #[test]
    fn add_is_atomic_when_a_later_child_is_parented() {
        let mut doc = Document::new();
        let first = doc.create_element("div").unwrap();
        let second = doc.create_element("div").unwrap();
        let fresh = doc.create_element("button").unwrap();
        let taken = doc.create_element("button").unwrap();
        doc.add(first, &[taken]).unwrap();

        let err = doc.add(second, &[fresh, taken]).unwrap_err();

        assert!(matches!(err, MenuCssError::InvalidState(_)));
        assert!(doc.children(second).is_empty());
        assert_eq!(doc.parent(fresh), None);
        assert_eq!(doc.parent(taken), Some(first));
        assert_eq!(doc.children(first), &[taken]);
    }

    #[test]
    fn add_rejects_duplicates_within_one_call() {
        let mut doc = Document::new();
        let menu = doc.create_element("div").unwrap();
        let button = doc.create_element("button").unwrap();

        let err = doc.add(menu, &[button, button]).unwrap_err();

        assert!(matches!(err, MenuCssError::InvalidState(_)));
        assert_eq!(doc.parent(button), None);
    }

    #[test]
    fn add_rejects_cycles() {
        let mut doc = Document::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("div").unwrap();
        doc.add(outer, &[inner]).unwrap();

        assert!(matches!(
            doc.add(outer, &[outer]),
            Err(MenuCssError::InvalidState(_))
        ));
        assert!(matches!(
            doc.add(inner, &[outer]),
            Err(MenuCssError::InvalidState(_))
        ));
    }

    #[test]
    fn add_to_text_node_is_invalid_argument() {
        let mut doc = Document::new();
        let label = doc.create_text("Start");
        let button = doc.create_element("button").unwrap();

        assert!(matches!(
            doc.add(label, &[button]),
            Err(MenuCssError::InvalidArgument(_))
        ));
    }

    #[test]
    fn handles_from_other_documents_are_rejected() {
        let mut doc = Document::new();
        let mut other = Document::new();
        let menu = doc.create_element("div").unwrap();
        let stranger = other.create_element("button").unwrap();

        assert!(!doc.contains(stranger));
        assert!(matches!(
            doc.add(menu, &[stranger]),
            Err(MenuCssError::InvalidArgument(_))
        ));
        assert!(doc.get(stranger).is_none());
    }

    #[test]
    fn descendants_walk_in_pre_order() {
        let mut doc = Document::new();
        let root = doc.create_element("div").unwrap();
        let title = doc.create_text("Title");
        let menu = doc.create_element("div").unwrap();
        let a = doc.create_element("button").unwrap();
        let b = doc.create_element("button").unwrap();
        doc.add(menu, &[a, b]).unwrap();
        doc.add(root, &[title, menu]).unwrap();

        let order: Vec<NodeId> = doc.descendants(root).collect();
        assert_eq!(order, vec![root, title, menu, a, b]);

        let elements: Vec<NodeId> = doc.elements(root).map(|(id, _)| id).collect();
        assert_eq!(elements, vec![root, menu, a, b]);
    }

    #[test]
    fn inserted_elements_never_carry_children() {
        let mut doc = Document::new();
        let parent = doc.create_element("div").unwrap();
        let child = doc.create_element("span").unwrap();
        doc.add(parent, &[child]).unwrap();

        let copy = doc.element(parent).unwrap().clone();
        let copied = doc.insert_element(copy);

        assert!(doc.children(copied).is_empty());
        assert_eq!(doc.parent(child), Some(parent));
    }
}
