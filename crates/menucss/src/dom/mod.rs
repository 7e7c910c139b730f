//! The retained UI tree: element and text nodes owned by a [`Document`].
//!
//! - [`node`]: node variants and the [`NodeId`] handle
//! - [`document`]: the arena plus `add`, lookups and pre-order traversal
//! - [`ui`]: `div`/`button`/`text` shorthands and class-list parsing

pub mod document;
pub mod node;
pub mod ui;

pub use document::{Descendants, Document};
pub use node::{Element, Node, NodeId, NodeKind, TextNode};
pub use ui::parse_class_list;
