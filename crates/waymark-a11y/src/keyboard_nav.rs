//! Keyboard Navigation
//!
//! Navigation categories, the logical command surface and the shortcut
//! registry that maps physical key codes onto commands.

use std::collections::HashMap;
use std::fmt;

use crate::A11yError;

/// Navigation category of an accessible element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Header,
    Link,
    Landmark,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Header, Self::Link, Self::Landmark];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Link => "link",
            Self::Landmark => "landmark",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traversal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Logical navigator command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NavigateCategory(Category),
    SetDirection(Direction),
    JumpToTop,
    EscapeFocusedInput,
}

impl Command {
    /// Parse a command name as used in configuration files
    pub fn parse(name: &str) -> Result<Self, A11yError> {
        Ok(match name.trim() {
            "navigate-header" => Self::NavigateCategory(Category::Header),
            "navigate-link" => Self::NavigateCategory(Category::Link),
            "navigate-landmark" => Self::NavigateCategory(Category::Landmark),
            "direction-forward" => Self::SetDirection(Direction::Forward),
            "direction-backward" => Self::SetDirection(Direction::Backward),
            "jump-to-top" => Self::JumpToTop,
            "escape-input" => Self::EscapeFocusedInput,
            other => return Err(A11yError::UnknownCommand(other.to_string())),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NavigateCategory(Category::Header) => "navigate-header",
            Self::NavigateCategory(Category::Link) => "navigate-link",
            Self::NavigateCategory(Category::Landmark) => "navigate-landmark",
            Self::SetDirection(Direction::Forward) => "direction-forward",
            Self::SetDirection(Direction::Backward) => "direction-backward",
            Self::JumpToTop => "jump-to-top",
            Self::EscapeFocusedInput => "escape-input",
        }
    }

    /// Suppressed while a text input has focus
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Self::EscapeFocusedInput)
    }

    /// The key's default browser action (scrolling) must be cancelled
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::SetDirection(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard shortcut keyed by physical key code (`KeyH`, `ArrowUp`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyboardShortcut {
    pub fn new(key: &str) -> Self { Self { key: key.into(), ctrl: false, alt: false, shift: false, meta: false } }
    pub fn ctrl(mut self) -> Self { self.ctrl = true; self }
    pub fn alt(mut self) -> Self { self.alt = true; self }
    pub fn shift(mut self) -> Self { self.shift = true; self }
    pub fn meta(mut self) -> Self { self.meta = true; self }

    /// Parse `Ctrl+Shift+KeyH` style strings
    pub fn parse(text: &str) -> Result<Self, A11yError> {
        let invalid = || A11yError::InvalidShortcut(text.to_string());
        let mut parts: Vec<&str> = text.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;

        let mut shortcut = Self::new(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => shortcut.ctrl = true,
                "alt" | "option" => shortcut.alt = true,
                "shift" => shortcut.shift = true,
                "meta" | "cmd" => shortcut.meta = true,
                _ => return Err(invalid()),
            }
        }
        Ok(shortcut)
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl { parts.push("Ctrl"); }
        if self.alt { parts.push("Alt"); }
        if self.shift { parts.push("Shift"); }
        if self.meta { parts.push("Cmd"); }
        parts.push(&self.key);
        parts.join("+")
    }
}

/// Shortcut registry
#[derive(Debug, Default, Clone)]
pub struct ShortcutRegistry {
    shortcuts: HashMap<KeyboardShortcut, Command>,
}

impl ShortcutRegistry {
    /// Registry with the default bindings
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(KeyboardShortcut::new("KeyH"), Command::NavigateCategory(Category::Header));
        registry.register(KeyboardShortcut::new("KeyL"), Command::NavigateCategory(Category::Link));
        registry.register(KeyboardShortcut::new("KeyM"), Command::NavigateCategory(Category::Landmark));
        registry.register(KeyboardShortcut::new("ArrowDown"), Command::SetDirection(Direction::Forward));
        registry.register(KeyboardShortcut::new("ArrowUp"), Command::SetDirection(Direction::Backward));
        registry.register(KeyboardShortcut::new("KeyT"), Command::JumpToTop);
        registry.register(KeyboardShortcut::new("Escape"), Command::EscapeFocusedInput);
        registry
    }

    /// Bind a shortcut, replacing any previous binding for it
    pub fn register(&mut self, shortcut: KeyboardShortcut, command: Command) -> Option<Command> {
        self.shortcuts.insert(shortcut, command)
    }

    pub fn unregister(&mut self, shortcut: &KeyboardShortcut) -> Option<Command> {
        self.shortcuts.remove(shortcut)
    }

    pub fn command_for(&self, shortcut: &KeyboardShortcut) -> Option<Command> {
        self.shortcuts.get(shortcut).copied()
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.command_for(&KeyboardShortcut::new("KeyH")),
            Some(Command::NavigateCategory(Category::Header))
        );
        assert_eq!(
            registry.command_for(&KeyboardShortcut::new("ArrowUp")),
            Some(Command::SetDirection(Direction::Backward))
        );
        assert_eq!(registry.command_for(&KeyboardShortcut::new("KeyH").shift()), None);
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_command_names() {
        for category in Category::ALL {
            let command = Command::NavigateCategory(category);
            assert_eq!(Command::parse(command.as_str()), Ok(command));
        }
        assert_eq!(Command::parse("jump-to-top"), Ok(Command::JumpToTop));
        assert_eq!(Command::parse("fly"), Err(A11yError::UnknownCommand("fly".into())));
    }

    #[test]
    fn test_commands_usable_as_set_keys() {
        let registry = ShortcutRegistry::new();
        let bound: std::collections::HashSet<Command> = ["KeyH", "KeyL", "KeyM", "ArrowDown", "ArrowUp", "KeyT", "Escape"]
            .into_iter()
            .filter_map(|key| registry.command_for(&KeyboardShortcut::new(key)))
            .collect();
        assert_eq!(bound.len(), 7);
        assert!(bound.contains(&Command::SetDirection(Direction::Backward)));
    }

    #[test]
    fn test_guard_flags() {
        assert!(Command::JumpToTop.is_guarded());
        assert!(!Command::EscapeFocusedInput.is_guarded());
        assert!(Command::SetDirection(Direction::Backward).suppresses_default());
        assert!(!Command::NavigateCategory(Category::Link).suppresses_default());
    }

    #[test]
    fn test_shortcut_parse() {
        let shortcut = KeyboardShortcut::parse("Ctrl+Shift+KeyH").unwrap();
        assert_eq!(shortcut, KeyboardShortcut::new("KeyH").ctrl().shift());
        assert_eq!(shortcut.display(), "Ctrl+Shift+KeyH");
        assert!(KeyboardShortcut::parse("Hyper+KeyH").is_err());
        assert!(KeyboardShortcut::parse("Ctrl+").is_err());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ShortcutRegistry::new();
        let previous = registry.register(KeyboardShortcut::new("KeyH"), Command::JumpToTop);
        assert_eq!(previous, Some(Command::NavigateCategory(Category::Header)));
        assert_eq!(registry.unregister(&KeyboardShortcut::new("KeyH")), Some(Command::JumpToTop));
    }
}
