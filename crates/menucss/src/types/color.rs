//! The abstract 16-color console palette.
//!
//! Styles only ever refer to these values. Translating them into a concrete
//! terminal color is the renderer's job.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::MenuCssError;

/// One of the sixteen console colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

static COLOR_NAMES: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "dark-blue" => Color::DarkBlue,
    "dark-green" => Color::DarkGreen,
    "dark-cyan" => Color::DarkCyan,
    "dark-red" => Color::DarkRed,
    "dark-magenta" => Color::DarkMagenta,
    "dark-yellow" => Color::DarkYellow,
    "gray" => Color::Gray,
    "dark-gray" => Color::DarkGray,
    "blue" => Color::Blue,
    "green" => Color::Green,
    "cyan" => Color::Cyan,
    "red" => Color::Red,
    "magenta" => Color::Magenta,
    "yellow" => Color::Yellow,
    "white" => Color::White,
};

impl Color {
    /// Every palette entry, in console order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// The kebab-case name, e.g. `dark-blue`.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "dark-blue",
            Color::DarkGreen => "dark-green",
            Color::DarkCyan => "dark-cyan",
            Color::DarkRed => "dark-red",
            Color::DarkMagenta => "dark-magenta",
            Color::DarkYellow => "dark-yellow",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = MenuCssError;

    /// Parses a palette name case-insensitively. Both `dark-blue` and
    /// `darkblue` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(color) = COLOR_NAMES.get(name.as_str()) {
            return Ok(*color);
        }
        if let Some(rest) = name.strip_prefix("dark") {
            if let Some(color) = COLOR_NAMES.get(format!("dark-{rest}").as_str()) {
                return Ok(*color);
            }
        }
        Err(MenuCssError::InvalidArgument(format!("unknown color: {s}")))
    }
}
