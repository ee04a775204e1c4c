//! Waymark Accessibility
//!
//! Accessibility vocabulary shared by the navigator.
//!
//! Features:
//! - Navigation categories (headings, links, landmarks)
//! - Landmark ARIA roles
//! - Keyboard shortcuts and the command surface
//! - Text-input detection and the highlight indicator

pub mod aria;
pub mod focus;
pub mod keyboard_nav;

pub use aria::LandmarkRole;
pub use focus::{HighlightIndicator, BorderStyle, is_text_input};
pub use keyboard_nav::{Category, Command, Direction, KeyboardShortcut, ShortcutRegistry};

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid keyboard shortcut: {0:?}")]
    InvalidShortcut(String),
}
