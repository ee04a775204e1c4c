//! Selector lists
//!
//! A small subset of CSS selectors: comma-separated groups of compound
//! selectors made from type, universal, id, class and attribute parts.
//! Combinators and pseudo-classes are not supported.

use std::fmt;

use crate::ElementData;

/// Selector parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character {ch:?} in selector {selector:?}")]
    UnexpectedChar { ch: char, selector: String },

    #[error("Unterminated attribute selector in {0:?}")]
    Unterminated(String),

    #[error("Invalid attribute selector [{0}]")]
    InvalidAttribute(String),

    #[error("Type selector must come first in {0:?}")]
    TypeNotFirst(String),
}

/// A simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// Universal selector *
    Universal,
    /// Type selector (lower-cased tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr] or [attr=value]
    Attribute(AttributeSelector),
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub name: String,
    pub value: Option<String>,
}

impl AttributeSelector {
    /// Check if an attribute value matches
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (&self.value, value) {
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
            (_, None) => false,
        }
    }
}

/// A sequence of simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    /// The tag name if this compound is a bare type selector
    pub fn as_type(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [SimpleSelector::Type(tag)] => Some(tag),
            _ => None,
        }
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|part| match part {
            SimpleSelector::Universal => true,
            SimpleSelector::Type(tag) => element.tag_name.eq_ignore_ascii_case(tag),
            SimpleSelector::Id(id) => element.id() == Some(id.as_str()),
            SimpleSelector::Class(class) => element.classes.contains(class),
            SimpleSelector::Attribute(attr) => attr.matches(element.get_attr(&attr.name).as_deref()),
        })
    }

    fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parts = Vec::new();
        let mut rest = input;

        while let Some(ch) = rest.chars().next() {
            match ch {
                '*' => {
                    parts.push(SimpleSelector::Universal);
                    rest = &rest[1..];
                }
                '#' | '.' => {
                    let (name, tail) = take_ident(&rest[1..]);
                    if name.is_empty() {
                        return Err(SelectorError::UnexpectedChar { ch, selector: input.to_string() });
                    }
                    parts.push(if ch == '#' {
                        SimpleSelector::Id(name.to_string())
                    } else {
                        SimpleSelector::Class(name.to_string())
                    });
                    rest = tail;
                }
                '[' => {
                    let end = rest
                        .find(']')
                        .ok_or_else(|| SelectorError::Unterminated(input.to_string()))?;
                    parts.push(SimpleSelector::Attribute(parse_attribute(&rest[1..end])?));
                    rest = &rest[end + 1..];
                }
                c if is_ident_char(c) => {
                    if !parts.is_empty() {
                        return Err(SelectorError::TypeNotFirst(input.to_string()));
                    }
                    let (name, tail) = take_ident(rest);
                    parts.push(SimpleSelector::Type(name.to_ascii_lowercase()));
                    rest = tail;
                }
                _ => {
                    return Err(SelectorError::UnexpectedChar { ch, selector: input.to_string() });
                }
            }
        }

        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { parts })
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                SimpleSelector::Universal => f.write_str("*")?,
                SimpleSelector::Type(tag) => f.write_str(tag)?,
                SimpleSelector::Id(id) => write!(f, "#{id}")?,
                SimpleSelector::Class(class) => write!(f, ".{class}")?,
                SimpleSelector::Attribute(AttributeSelector { name, value: None }) => write!(f, "[{name}]")?,
                SimpleSelector::Attribute(AttributeSelector { name, value: Some(v) }) => {
                    write!(f, "[{name}=\"{v}\"]")?
                }
            }
        }
        Ok(())
    }
}

/// Comma-separated selector group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList {
    compounds: Vec<CompoundSelector>,
}

impl SelectorList {
    /// Parse a selector group such as `h1,h2,[role=main]`
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let compounds = input
            .split(',')
            .map(|s| CompoundSelector::parse(s.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compounds })
    }

    /// Union of several lists, keeping first occurrences in order
    pub fn union<'a>(lists: impl IntoIterator<Item = &'a SelectorList>) -> Self {
        let mut compounds: Vec<CompoundSelector> = Vec::new();
        for list in lists {
            for compound in &list.compounds {
                if !compounds.contains(compound) {
                    compounds.push(compound.clone());
                }
            }
        }
        Self { compounds }
    }

    pub fn compounds(&self) -> &[CompoundSelector] {
        &self.compounds
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Whether any compound matches the element
    pub fn matches(&self, element: &ElementData) -> bool {
        self.compounds.iter().any(|c| c.matches(element))
    }

    /// Whether the list names `tag` as a bare type selector (case-insensitive)
    pub fn has_type(&self, tag: &str) -> bool {
        self.compounds
            .iter()
            .filter_map(CompoundSelector::as_type)
            .any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{compound}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_attribute(inner: &str) -> Result<AttributeSelector, SelectorError> {
    let invalid = || SelectorError::InvalidAttribute(inner.to_string());
    let (name, value) = match inner.split_once('=') {
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (name.trim(), Some(unquoted.to_string()))
        }
        None => (inner.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(invalid());
    }
    Ok(AttributeSelector {
        name: name.to_ascii_lowercase(),
        value,
    })
}
