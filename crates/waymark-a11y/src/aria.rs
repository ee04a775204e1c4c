//! ARIA Support
//!
//! Landmark roles and the implicit roles of sectioning elements.

use std::fmt;
use std::str::FromStr;

use crate::A11yError;

/// ARIA landmark role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkRole {
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,
}

impl LandmarkRole {
    pub const ALL: [LandmarkRole; 8] = [
        Self::Banner,
        Self::Complementary,
        Self::ContentInfo,
        Self::Form,
        Self::Main,
        Self::Navigation,
        Self::Region,
        Self::Search,
    ];

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Form => "form",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Search => "search",
        }
    }

    /// Implicit landmark role of an HTML element
    pub fn implicit_for_tag(tag: &str) -> Option<Self> {
        Some(match tag.to_ascii_lowercase().as_str() {
            "header" => Self::Banner,
            "aside" => Self::Complementary,
            "footer" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "nav" => Self::Navigation,
            "section" => Self::Region,
            "search" => Self::Search,
            _ => return None,
        })
    }

    /// Selector matching an explicit `role` attribute, e.g. `[role=main]`
    pub fn attribute_selector(&self) -> String {
        format!("[role={}]", self.as_str())
    }
}

impl fmt::Display for LandmarkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandmarkRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| A11yError::InvalidRole(s.to_string()))
    }
}
