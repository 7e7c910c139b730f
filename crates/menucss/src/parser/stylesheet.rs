use crate::error::Result;
use crate::parser::selectors::Selector;
use crate::types::Style;

/// A selector paired with the style it contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    selector: Selector,
    style: Style,
    source_order: usize,
}

impl StyleRule {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Position of the rule in its stylesheet.
    pub fn source_order(&self) -> usize {
        self.source_order
    }

    pub fn specificity(&self) -> u32 {
        self.selector.specificity()
    }
}

/// An ordered, append-only list of rules.
///
/// When two matching rules have the same specificity, the one added later
/// wins.
///
/// ```rust
/// use menucss::{Color, StyleSheet};
///
/// let mut sheet = StyleSheet::new();
/// sheet
///     .rule("button", |s| s.padding = 1)?
///     .rule(".primary", |s| s.bg = Some(Color::Green))?;
///
/// assert_eq!(sheet.len(), 2);
/// # Ok::<(), menucss::MenuCssError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `selector_text`, lets `configure` fill in a fresh [`Style`] and
    /// appends the result as a new rule.
    ///
    /// Fails without adding anything if the selector text is blank.
    pub fn rule<F>(&mut self, selector_text: &str, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Style),
    {
        let selector = Selector::parse(selector_text)?;
        let mut style = Style::default();
        configure(&mut style);
        Ok(self.push(selector, style))
    }

    /// Appends an already-built rule.
    pub fn push(&mut self, selector: Selector, style: Style) -> &mut Self {
        let source_order = self.rules.len();
        self.rules.push(StyleRule {
            selector,
            style,
            source_order,
        });
        self
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
