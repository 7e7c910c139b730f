//! Palette to terminal color conversion.

use crossterm::style::Color as TermColor;
use menucss::Color;

/// Maps a palette entry to the matching crossterm color.
pub fn to_terminal_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::DarkBlue => TermColor::DarkBlue,
        Color::DarkGreen => TermColor::DarkGreen,
        Color::DarkCyan => TermColor::DarkCyan,
        Color::DarkRed => TermColor::DarkRed,
        Color::DarkMagenta => TermColor::DarkMagenta,
        Color::DarkYellow => TermColor::DarkYellow,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Cyan => TermColor::Cyan,
        Color::Red => TermColor::Red,
        Color::Magenta => TermColor::Magenta,
        Color::Yellow => TermColor::Yellow,
        Color::White => TermColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn grays_use_crossterm_spelling() {
        assert_eq!(to_terminal_color(Color::Gray), TermColor::Grey);
        assert_eq!(to_terminal_color(Color::DarkGray), TermColor::DarkGrey);
    }

    #[test]
    fn palette_maps_to_distinct_colors() {
        let mapped: HashSet<String> = Color::ALL
            .iter()
            .map(|c| format!("{:?}", to_terminal_color(*c)))
            .collect();
        assert_eq!(mapped.len(), Color::ALL.len());
        assert!(!mapped.contains("Reset"));
    }
}
