//! Waymark
//!
//! Keyboard navigation through the headings, links and landmark regions of
//! a live page. The navigator keeps an ordered collection of accessible
//! elements fresh as the DOM changes and cycles a highlighted selection
//! through it one category at a time.
//!
//! # Example
//! ```rust
//! use waymark::{Navigator, Config};
//! use waymark::a11y::KeyboardShortcut;
//! use waymark::dom::Document;
//!
//! let mut doc = Document::new();
//! let h1 = doc.tree.create_element("h1");
//! let body = doc.body();
//! doc.tree.append_child(body, h1).unwrap();
//!
//! let mut navigator = Navigator::from_config(&Config::default()).unwrap();
//! navigator.attach(&mut doc).unwrap();
//! navigator.handle_key(&mut doc, &KeyboardShortcut::new("KeyH"));
//! assert_eq!(doc.active_element(), Some(h1));
//! ```

mod config;
mod classifier;
mod tracker;
mod observer;
mod engine;
mod highlight;
mod navigator;

pub use config::{Config, CategorySelectors, BindingConfig, CompiledConfig, ConfigError};
pub use classifier::{classify, classify_node};
pub use tracker::{CollectionTracker, collect};
pub use observer::{ChangeObserver, WatchId};
pub use engine::{NavigationHost, NavigationState, advance};
pub use highlight::{DocumentHighlighter, inject_highlight_style};
pub use navigator::{Navigator, KeyOutcome, Selection};

// Re-export sub-crates
pub use waymark_dom as dom;
pub use waymark_a11y as a11y;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
