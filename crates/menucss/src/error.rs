//! Error types for tree construction, selector parsing and the cascade.

use thiserror::Error;

/// Errors raised by the core tree and styling operations.
///
/// Both variants describe programmer errors (a badly constructed UI), not
/// transient conditions. Every operation that returns one of these has made
/// no visible change to its receiver.
///
/// # Examples
///
/// ```rust
/// use menucss::{Document, MenuCssError};
///
/// let mut doc = Document::new();
/// let result = doc.create_element("   ");
/// assert!(matches!(result, Err(MenuCssError::InvalidArgument(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuCssError {
    /// Malformed or missing input: an empty element type, empty selector
    /// text, an unknown color name, or a node handle the document does not own.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A structural violation of the tree, such as attaching a node that
    /// already has a parent.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, MenuCssError>;
