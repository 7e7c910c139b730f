//! Computed style to cell attribute conversion.

use crossterm::style::Color as TermColor;
use menucss::{Color, Style};

use crate::color::to_terminal_color;
use crate::theme::Theme;

/// Colors for the cells an element draws.
///
/// `fg` always resolves, falling back to the theme. `bg` stays `None` when
/// the style leaves it unset so the parent's background shows through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellColors {
    pub fg: TermColor,
    pub bg: Option<TermColor>,
}

/// Spacing around and inside an element, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxMetrics {
    pub padding: i32,
    pub margin_top: i32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StyleMapper {
    monochrome: bool,
}

impl StyleMapper {
    pub fn new(monochrome: bool) -> Self {
        Self { monochrome }
    }

    /// `None` when the color is unset or the mapper is monochrome.
    pub fn color(&self, color: Option<Color>) -> Option<TermColor> {
        if self.monochrome {
            return None;
        }
        color.map(to_terminal_color)
    }

    pub fn colors(&self, style: &Style, theme: &Theme) -> CellColors {
        CellColors {
            fg: self.color(style.fg).unwrap_or(theme.foreground),
            bg: self.color(style.bg),
        }
    }

    /// Negative top margins collapse to zero.
    pub fn metrics(&self, style: &Style) -> BoxMetrics {
        BoxMetrics {
            padding: i32::from(style.padding),
            margin_top: i32::from(style.margin_top).max(0),
        }
    }
}
