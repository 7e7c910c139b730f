use crossterm::style::Color as TermColor;

use crate::error::{RenderError, Result};

/// Base colors used wherever a computed style leaves `fg` or `bg` unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub foreground: TermColor,
    pub background: TermColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default",
            foreground: TermColor::Reset,
            background: TermColor::Reset,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            foreground: TermColor::White,
            background: TermColor::Black,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            foreground: TermColor::Black,
            background: TermColor::White,
        }
    }

    /// Looks a theme up by name, ignoring case.
    pub fn named(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default()),
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(RenderError::UnknownTheme(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Theme::named("Default").unwrap(), Theme::default());
        assert_eq!(Theme::named("DARK").unwrap().background, TermColor::Black);
        assert_eq!(Theme::named("light").unwrap().foreground, TermColor::Black);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(matches!(
            Theme::named("solarized"),
            Err(RenderError::UnknownTheme(name)) if name == "solarized"
        ));
    }
}
