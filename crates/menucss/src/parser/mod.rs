//! Selectors, stylesheets and the cascade.
//!
//! - [`selectors`]: selector parsing, matching and specificity
//! - [`stylesheet`]: ordered rule lists
//! - [`cascade`]: per-element and whole-tree style computation

pub mod cascade;
pub mod selectors;
pub mod stylesheet;

pub use crate::parser::cascade::{ComputedStyles, StyleComputer, compute_style};
pub use crate::parser::selectors::{Selector, parse_selector};
pub use crate::parser::stylesheet::{StyleRule, StyleSheet};
