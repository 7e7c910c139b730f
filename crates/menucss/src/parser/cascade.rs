//! Style computation.
//!
//! - [`compute_style`]: the cascade for a single element
//! - [`StyleComputer::compute`]: the cascade for every element of a tree
//! - [`ComputedStyles`]: the result, keyed by element identity
//!
//! ## Cascade Algorithm
//!
//! 1. Find all rules whose selector matches the element
//! 2. Sort by specificity, then source order (both ascending)
//! 3. Merge each rule's style into a fresh default style in that order, so
//!    higher specificity always wins and later rules win ties
//!
//! There is no inheritance: an element's computed style only depends on the
//! element itself and the stylesheet.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::dom::{Document, Element, NodeId};
use crate::error::Result;
use crate::parser::stylesheet::{StyleRule, StyleSheet};
use crate::types::Style;

/// A rule that matched an element, bundled with its priority information.
#[derive(Debug)]
struct MatchedRule<'a> {
    specificity: u32,
    source_order: usize,
    rule: &'a StyleRule,
}

/// The cascade for a single element.
pub fn compute_style(element: &Element, sheet: &StyleSheet) -> Style {
    let mut matched: SmallVec<[MatchedRule<'_>; 8]> = sheet
        .rules()
        .iter()
        .filter(|rule| rule.selector().matches(element))
        .map(|rule| MatchedRule {
            specificity: rule.specificity(),
            source_order: rule.source_order(),
            rule,
        })
        .collect();

    matched.sort_by(|a, b| {
        a.specificity
            .cmp(&b.specificity)
            .then(a.source_order.cmp(&b.source_order))
    });

    let mut computed = Style::default();
    for m in &matched {
        computed.merge_from(m.rule.style());
    }

    log::trace!(
        "CASCADE: Element='{}' Id={:?} Matched={} -> {:?}",
        element.type_name(),
        element.id(),
        matched.len(),
        computed
    );

    computed
}

/// Computes styles for whole trees.
pub struct StyleComputer;

impl StyleComputer {
    /// Computes a style for `root` and every element below it.
    ///
    /// Text nodes receive no entry. Neither the document nor the sheet is
    /// modified. Fails with
    /// [`MenuCssError::InvalidArgument`](crate::MenuCssError::InvalidArgument)
    /// if `root` is not an element of `doc`.
    ///
    /// ```rust
    /// use menucss::{Color, Document, StyleComputer, StyleSheet};
    ///
    /// let mut doc = Document::new();
    /// let button = doc.button("OK", None, Some("primary"));
    ///
    /// let mut sheet = StyleSheet::new();
    /// sheet
    ///     .rule(".primary", |s| s.bg = Some(Color::Green))?
    ///     .rule("button", |s| s.bg = Some(Color::Gray))?;
    ///
    /// let styles = StyleComputer::compute(&doc, button, &sheet)?;
    /// assert_eq!(styles.get(button).unwrap().bg, Some(Color::Green));
    /// # Ok::<(), menucss::MenuCssError>(())
    /// ```
    pub fn compute(doc: &Document, root: NodeId, sheet: &StyleSheet) -> Result<ComputedStyles> {
        doc.element(root)?;

        let mut computed = ComputedStyles::default();
        for (id, element) in doc.elements(root) {
            computed.insert(id, compute_style(element, sheet));
        }

        log::debug!(
            "CASCADE: computed {} style(s) from {} rule(s)",
            computed.len(),
            sheet.len()
        );
        Ok(computed)
    }
}

/// Computed styles keyed by element, iterated in pre-order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyles {
    entries: Vec<(NodeId, Style)>,
    index: HashMap<NodeId, usize>,
}

impl ComputedStyles {
    fn insert(&mut self, id: NodeId, style: Style) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = style,
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push((id, style));
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Style> {
        self.index.get(&id).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a ComputedStyles {
    type Item = (NodeId, &'a Style);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over [`ComputedStyles`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (NodeId, Style)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a Style);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, style)| (*id, style))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
