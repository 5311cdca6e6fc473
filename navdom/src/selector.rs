//! Compound CSS selectors.
//!
//! Supports a type selector (or `*`) followed by any number of `#id`,
//! `.class`, `[attr]` and `[attr=value]` parts. Combinators and selector
//! lists are not supported.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::Element;

/// Errors produced while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("expected a name at position {position}")]
    MissingName { position: usize },
    #[error("unterminated attribute selector starting at position {position}")]
    UnterminatedAttribute { position: usize },
    #[error("unterminated quoted value starting at position {position}")]
    UnterminatedValue { position: usize },
}

/// Matches an attribute by presence, or by exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatcher {
    pub name: String,
    pub value: Option<String>,
}

impl AttrMatcher {
    fn matches(&self, element: &Element) -> bool {
        match (&self.value, element.get_attr(&self.name)) {
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
            (_, None) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrMatcher>,
}

impl Selector {
    /// Matches every element (`*`).
    pub fn any() -> Self {
        Self::default()
    }

    /// Matches elements with the given tag name (case-insensitive).
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into().to_ascii_lowercase()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Require the attribute to be present, with any value.
    pub fn with_attr(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttrMatcher {
            name: name.into(),
            value: None,
        });
        self
    }

    /// Require the attribute to be present with exactly this value.
    pub fn with_attr_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(AttrMatcher {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
            && self.attributes.iter().all(|attr| attr.matches(element))
    }

    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let chars: Vec<char> = input.trim().chars().collect();
        if chars.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let mut pos = 0;

        if chars[0] == '*' {
            pos = 1;
        } else {
            let tag = read_ident(&chars, &mut pos);
            if !tag.is_empty() {
                selector.tag = Some(tag.to_ascii_lowercase());
            }
        }

        while pos < chars.len() {
            match chars[pos] {
                '#' => {
                    pos += 1;
                    selector.id = Some(read_name(&chars, &mut pos)?);
                }
                '.' => {
                    pos += 1;
                    selector.classes.push(read_name(&chars, &mut pos)?);
                }
                '[' => {
                    let start = pos;
                    pos += 1;
                    let name = read_name(&chars, &mut pos)?;
                    let value = match chars.get(pos) {
                        Some(']') => None,
                        Some('=') => {
                            pos += 1;
                            Some(read_value(&chars, &mut pos)?)
                        }
                        Some(&ch) => return Err(SelectorError::UnexpectedChar { ch, position: pos }),
                        None => return Err(SelectorError::UnterminatedAttribute { position: start }),
                    };
                    match chars.get(pos) {
                        Some(']') => pos += 1,
                        Some(&ch) => return Err(SelectorError::UnexpectedChar { ch, position: pos }),
                        None => return Err(SelectorError::UnterminatedAttribute { position: start }),
                    }
                    selector.attributes.push(AttrMatcher { name, value });
                }
                ch => return Err(SelectorError::UnexpectedChar { ch, position: pos }),
            }
        }

        Ok(selector)
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn read_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while chars.get(*pos).is_some_and(|&ch| is_ident_char(ch)) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn read_name(chars: &[char], pos: &mut usize) -> Result<String, SelectorError> {
    let position = *pos;
    let name = read_ident(chars, pos);
    if name.is_empty() {
        return Err(SelectorError::MissingName { position });
    }
    Ok(name)
}

fn read_value(chars: &[char], pos: &mut usize) -> Result<String, SelectorError> {
    match chars.get(*pos) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            let start = *pos;
            *pos += 1;
            let mut value = String::new();
            loop {
                match chars.get(*pos) {
                    Some(&ch) if ch == quote => {
                        *pos += 1;
                        return Ok(value);
                    }
                    Some(&ch) => {
                        value.push(ch);
                        *pos += 1;
                    }
                    None => return Err(SelectorError::UnterminatedValue { position: start }),
                }
            }
        }
        _ => read_name(chars, pos),
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bare = self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty();
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if bare => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                None => write!(f, "[{}]", attr.name)?,
            }
        }
        Ok(())
    }
}
