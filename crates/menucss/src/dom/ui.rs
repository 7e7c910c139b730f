//! Shorthand constructors for building trees in an HTML-like style.
//!
//! ```rust
//! use menucss::Document;
//!
//! let mut doc = Document::new();
//! let root = doc.div(Some("app"), Some("layout"));
//! let title = doc.text("Console UI");
//! let menu = doc.div(None, Some("menu"));
//! let start = doc.button("Start", None, None);
//! let quit = doc.button("Quit", None, None);
//!
//! doc.add(menu, &[start, quit]).unwrap();
//! doc.add(root, &[title, menu]).unwrap();
//!
//! assert_eq!(doc.elements(root).count(), 4);
//! ```

use crate::dom::document::Document;
use crate::dom::node::{Element, NodeId};
use crate::error::Result;

impl Document {
    /// Creates a `div` element.
    pub fn div(&mut self, id: Option<&str>, class: Option<&str>) -> NodeId {
        let element = decorate(Element::with_type("div"), id, class);
        self.insert_element(element)
    }

    /// Creates a `button` element holding a single text child.
    pub fn button(&mut self, label: &str, id: Option<&str>, class: Option<&str>) -> NodeId {
        let button = self.insert_element(decorate(Element::with_type("button"), id, class));
        let text = self.create_text(label);
        self.attach(button, &[text]);
        button
    }

    /// Same as [`Document::create_text`].
    pub fn text(&mut self, text: &str) -> NodeId {
        self.create_text(text)
    }

    /// Creates an element of any type with an optional id and a
    /// space-separated class list.
    pub fn element_with(
        &mut self,
        type_name: &str,
        id: Option<&str>,
        class: Option<&str>,
    ) -> Result<NodeId> {
        let element = decorate(Element::new(type_name)?, id, class);
        Ok(self.insert_element(element))
    }
}

/// Splits a space-separated class attribute into distinct class names.
///
/// Empty segments are discarded and duplicates keep their first position.
pub fn parse_class_list(class: &str) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for token in class.split(' ').filter(|token| !token.is_empty()) {
        if !classes.iter().any(|existing| existing == token) {
            classes.push(token.to_string());
        }
    }
    classes
}

fn decorate(mut element: Element, id: Option<&str>, class: Option<&str>) -> Element {
    if let Some(id) = id {
        element.set_id(id);
    }
    for class in class.map(parse_class_list).unwrap_or_default() {
        element.add_class(class);
    }
    element
}
