//! Focus helpers
//!
//! Text-input detection and the visual indicator for the selected element.

use serde::Deserialize;

/// Whether an element with this tag captures typed text.
///
/// Navigation keys are ignored while one of these has focus.
pub fn is_text_input(tag: &str) -> bool {
    ["input", "select", "textarea"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}

/// Highlight indicator style
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightIndicator {
    /// Class added to the selected element
    pub class_name: String,
    pub border_width: f64,
    pub border_style: BorderStyle,
    pub border_color: String,
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }
}

impl HighlightIndicator {
    /// The single CSS rule injected into the page
    pub fn css_rule(&self) -> String {
        format!(
            ".{}{{border: {}px {} {}; padding: {}px}}",
            self.class_name,
            self.border_width,
            self.border_style.as_str(),
            self.border_color,
            self.padding
        )
    }
}

impl Default for HighlightIndicator {
    fn default() -> Self {
        Self {
            class_name: "waymark-highlighter".to_string(),
            border_width: 8.0,
            border_style: BorderStyle::Solid,
            border_color: "green".to_string(),
            padding: 8.0,
        }
    }
}
