//! Navigator Configuration

use serde::Deserialize;
use waymark_a11y::{A11yError, Category, Command, HighlightIndicator, KeyboardShortcut, LandmarkRole, ShortcutRegistry};
use waymark_dom::{SelectorError, SelectorList};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {category} selector: {source}")]
    Selector {
        category: Category,
        #[source]
        source: SelectorError,
    },

    #[error("Invalid key binding: {0}")]
    Binding(#[from] A11yError),
}

/// Navigator configuration options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selector group per category
    pub selectors: CategorySelectors,

    /// Highlight appearance
    pub highlight: HighlightIndicator,

    /// Extra key bindings applied over the defaults
    pub bindings: Vec<BindingConfig>,

    /// Scroll the selected element to the middle of the viewport
    pub center_on_select: bool,
}

/// Selector strings for each category
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CategorySelectors {
    pub header: String,
    pub link: String,
    pub landmark: String,
}

/// A single `{ "key": "Shift+KeyH", "command": "navigate-header" }` binding
#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
}

impl Default for CategorySelectors {
    fn default() -> Self {
        let mut landmark = String::from("banner,complementary,contentinfo,form,main,navigation,search");
        for role in LandmarkRole::ALL {
            landmark.push(',');
            landmark.push_str(&role.attribute_selector());
        }
        Self {
            header: "h1,h2,h3,h4,h5,h6".to_string(),
            link: "a".to_string(),
            landmark,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: CategorySelectors::default(),
            highlight: HighlightIndicator::default(),
            bindings: Vec::new(),
            center_on_select: true,
        }
    }
}

impl Config {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse selectors and bindings
    pub fn compile(&self) -> Result<CompiledConfig, ConfigError> {
        let parse = |category: Category, source: &str| {
            SelectorList::parse(source).map_err(|source| ConfigError::Selector { category, source })
        };
        let header = parse(Category::Header, &self.selectors.header)?;
        let link = parse(Category::Link, &self.selectors.link)?;
        let landmark = parse(Category::Landmark, &self.selectors.landmark)?;
        let all = SelectorList::union([&header, &link, &landmark]);

        let mut shortcuts = ShortcutRegistry::new();
        for binding in &self.bindings {
            let shortcut = KeyboardShortcut::parse(&binding.key)?;
            let command = Command::parse(&binding.command)?;
            shortcuts.register(shortcut, command);
        }

        Ok(CompiledConfig {
            header,
            link,
            landmark,
            all,
            highlight: self.highlight.clone(),
            shortcuts,
            center_on_select: self.center_on_select,
        })
    }
}

/// Configuration with parsed selectors, ready for use
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    pub header: SelectorList,
    pub link: SelectorList,
    pub landmark: SelectorList,
    /// Union of every category's selectors
    pub all: SelectorList,
    pub highlight: HighlightIndicator,
    pub shortcuts: ShortcutRegistry,
    pub center_on_select: bool,
}

impl CompiledConfig {
    pub fn selector(&self, category: Category) -> &SelectorList {
        match category {
            Category::Header => &self.header,
            Category::Link => &self.link,
            Category::Landmark => &self.landmark,
        }
    }
}

impl Default for CompiledConfig {
    fn default() -> Self {
        let defaults = CategorySelectors::default();
        let parse = |s: &str| SelectorList::parse(s).unwrap_or_default();
        let header = parse(&defaults.header);
        let link = parse(&defaults.link);
        let landmark = parse(&defaults.landmark);
        let all = SelectorList::union([&header, &link, &landmark]);
        Self {
            header,
            link,
            landmark,
            all,
            highlight: HighlightIndicator::default(),
            shortcuts: ShortcutRegistry::new(),
            center_on_select: true,
        }
    }
}
