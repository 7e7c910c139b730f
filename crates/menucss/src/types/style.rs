use crate::types::Color;

/// A partial set of visual properties.
///
/// Zero and `None` mean "not specified here", never "explicitly zero". This
/// is what lets rules be folded together with [`Style::merge_from`], and it
/// also means no rule can set `padding` or `margin_top` back to 0 once an
/// earlier rule has set them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Inset applied on all four sides inside the element.
    pub padding: u16,
    /// Rows left empty above the element.
    pub margin_top: i16,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin_top(mut self, margin_top: i16) -> Self {
        self.margin_top = margin_top;
        self
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Returns `true` if no property is specified.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays `other` onto `self`.
    ///
    /// Scalars are taken from `other` only when non-zero, colors only when
    /// present. The operation is not commutative: merge lower-priority
    /// styles first.
    pub fn merge_from(&mut self, other: &Style) {
        if other.padding != 0 {
            self.padding = other.padding;
        }
        if other.margin_top != 0 {
            self.margin_top = other.margin_top;
        }
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
    }
}
