//! Terminal menus described as a node tree and styled with a small CSS-like
//! cascade.
//!
//! [`menucss`] builds the tree and computes styles; [`menuterm`] draws the
//! result in a terminal.

pub use menucss;
pub use menuterm;

pub mod prelude {
    pub use menucss::{
        Color, ComputedStyles, Document, MenuCssError, NodeId, Selector, Style, StyleComputer,
        StyleSheet,
    };
    pub use menuterm::{RenderConfig, RenderError, Renderer, init_logger};
}
