//! # menucss
//!
//! A retained UI tree for terminal menus and a small CSS-like cascade over it.
//!
//! - **Tree**: a [`Document`] owns [`Element`] and [`TextNode`] values and
//!   links them with [`NodeId`] handles
//! - **Selectors**: `button`, `#app`, `.primary` and `div.menu`
//! - **Cascade**: [`StyleComputer::compute`] folds every matching rule into one
//!   [`Style`] per element, ordered by specificity and then source order
//!
//! ## Quick Start
//!
//! ```rust
//! use menucss::{Color, Document, StyleComputer, StyleSheet};
//!
//! let mut doc = Document::new();
//! let root = doc.div(Some("app"), Some("layout"));
//! let settings = doc.button("Settings", None, Some("selected"));
//! let quit = doc.button("Quit", None, None);
//! doc.add(root, &[settings, quit])?;
//!
//! let mut sheet = StyleSheet::new();
//! sheet
//!     .rule("div.layout", |s| s.padding = 1)?
//!     .rule("button", |s| {
//!         s.fg = Some(Color::Black);
//!         s.bg = Some(Color::Gray);
//!     })?
//!     .rule("button.selected", |s| s.bg = Some(Color::Green))?;
//!
//! let styles = StyleComputer::compute(&doc, root, &sheet)?;
//! assert_eq!(styles.get(settings).unwrap().bg, Some(Color::Green));
//! assert_eq!(styles.get(quit).unwrap().bg, Some(Color::Gray));
//! # Ok::<(), menucss::MenuCssError>(())
//! ```
//!
//! ## Not Supported
//!
//! - Descendant and child combinators
//! - Attribute selectors and pseudo-classes
//! - Inheritance from ancestors
//! - Incremental recomputation

pub mod dom;
pub mod error;
pub mod parser;
pub mod types;

pub use dom::{Document, Element, Node, NodeId, NodeKind, TextNode};
pub use error::{MenuCssError, Result};
pub use parser::{ComputedStyles, Selector, StyleComputer, StyleRule, StyleSheet, compute_style};
pub use types::{Color, Style};
