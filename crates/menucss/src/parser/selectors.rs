//! Simple selectors: a type, an id and a single class, each optional.
//!
//! Supported forms:
//!
//! - `button` (type)
//! - `#app` (id)
//! - `.primary` (class)
//! - `div.menu` (type + class)
//!
//! The text is split on its first `.`; whatever precedes it is the type and
//! whatever follows is the class. There are no combinators, attribute
//! selectors or pseudo-classes.

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_until,
    character::complete::char,
    combinator::{map, rest},
    sequence::{preceded, separated_pair},
};

use crate::dom::Element;
use crate::error::{MenuCssError, Result};

/// A parsed simple selector. Absent fields impose no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    type_name: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Builds a selector from its parts. Blank parts are treated as absent.
    pub fn new(type_name: Option<&str>, id: Option<&str>, class: Option<&str>) -> Self {
        Self {
            type_name: normalize(type_name),
            id: normalize(id),
            class: normalize(class),
        }
    }

    /// Parses selector text.
    ///
    /// Fails with [`MenuCssError::InvalidArgument`] if the text is empty or
    /// only whitespace.
    ///
    /// ```rust
    /// use menucss::Selector;
    ///
    /// let selector = Selector::parse("div.menu").unwrap();
    /// assert_eq!(selector.type_name(), Some("div"));
    /// assert_eq!(selector.class(), Some("menu"));
    /// assert_eq!(selector.specificity(), 11);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MenuCssError::InvalidArgument(
                "selector text must be a non-empty string".to_string(),
            ));
        }

        let (_, selector) = parse_selector(text)
            .map_err(|e| MenuCssError::InvalidArgument(e.to_string()))?;
        Ok(selector)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// 100 for an id, 10 for a class, 1 for a type, summed.
    pub fn specificity(&self) -> u32 {
        let mut score = 0;
        if self.id.is_some() {
            score += 100;
        }
        if self.class.is_some() {
            score += 10;
        }
        if self.type_name.is_some() {
            score += 1;
        }
        score
    }

    /// Returns `true` if every specified part agrees with `element`.
    ///
    /// Types compare case-insensitively; ids and classes compare exactly.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(type_name) = &self.type_name {
            if !eq_ignore_case(type_name, element.type_name()) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if element.id() != Some(id.as_str()) {
                return false;
            }
        }

        match &self.class {
            Some(class) => element.has_class(class),
            None => true,
        }
    }
}

impl FromStr for Selector {
    type Err = MenuCssError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_name.is_none() && self.id.is_none() && self.class.is_none() {
            return f.write_str("*");
        }
        if let Some(type_name) = &self.type_name {
            f.write_str(type_name)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        if let Some(class) = &self.class {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Parses a whole selector. Never fails on non-empty input.
pub fn parse_selector(input: &str) -> IResult<&str, Selector> {
    alt((parse_type_and_class, parse_id_selector, parse_type_selector))(input)
}

/// `type.class` or `.class`, split on the first dot.
fn parse_type_and_class(input: &str) -> IResult<&str, Selector> {
    map(
        separated_pair(take_until("."), char('.'), rest),
        |(type_name, class): (&str, &str)| Selector::new(Some(type_name), None, Some(class)),
    )(input)
}

fn parse_id_selector(input: &str) -> IResult<&str, Selector> {
    map(preceded(char('#'), rest), |id: &str| {
        Selector::new(None, Some(id), None)
    })(input)
}

fn parse_type_selector(input: &str) -> IResult<&str, Selector> {
    map(rest, |type_name: &str| Selector::new(Some(type_name), None, None))(input)
}

fn normalize(part: Option<&str>) -> Option<String> {
    part.filter(|p| !p.trim().is_empty()).map(str::to_string)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_dot_splits_type_from_class() {
        let selector = Selector::parse("div.menu.extra").unwrap();
        assert_eq!(selector.type_name(), Some("div"));
        assert_eq!(selector.class(), Some("menu.extra"));
        assert_eq!(selector.id(), None);
    }

    #[test]
    fn id_prefix_before_a_dot_becomes_the_type() {
        let selector = Selector::parse("#app.layout").unwrap();
        assert_eq!(selector.type_name(), Some("#app"));
        assert_eq!(selector.class(), Some("layout"));
        assert_eq!(selector.id(), None);
    }

    #[test]
    fn empty_parts_are_unset() {
        let selector = Selector::parse("div.").unwrap();
        assert_eq!(selector.type_name(), Some("div"));
        assert_eq!(selector.class(), None);

        let selector = Selector::parse("#").unwrap();
        assert_eq!(selector, Selector::default());
        assert_eq!(selector.specificity(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let selector = Selector::parse("  button \n").unwrap();
        assert_eq!(selector.type_name(), Some("button"));
    }

    #[test]
    fn display_reproduces_the_source_form() {
        for text in ["button", "#app", ".primary", "div.menu"] {
            assert_eq!(Selector::parse(text).unwrap().to_string(), text);
        }
        assert_eq!(Selector::default().to_string(), "*");
    }

    #[test]
    fn case_folding_is_unicode_aware() {
        assert!(eq_ignore_case("BUTTON", "button"));
        assert!(eq_ignore_case("Übersicht", "übersicht"));
        assert!(!eq_ignore_case("button", "buttons"));
    }
}
