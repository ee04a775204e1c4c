//! Navigator - page-level controller
//!
//! One navigator per document. It owns the navigation state, the tracked
//! collection and the change observer, and turns key presses into
//! navigation commands.

use std::cell::Cell;
use std::rc::Rc;

use waymark_a11y::{Category, Command, Direction, KeyboardShortcut, LandmarkRole, is_text_input};
use waymark_dom::{Document, DomResult, DomTree, NodeId};

use crate::{
    ChangeObserver, CollectionTracker, CompiledConfig, Config, ConfigError, DocumentHighlighter,
    NavigationState, classify_node, inject_highlight_style,
};

/// What happened to a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Command bound to the key, if any
    pub command: Option<Command>,
    /// The command ran (false when unbound or suppressed by the input guard)
    pub handled: bool,
    /// The caller should cancel the key's default action
    pub prevent_default: bool,
}

/// The currently selected element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub node: NodeId,
    pub category: Category,
    /// Explicit or implicit landmark role, for landmark selections
    pub landmark: Option<LandmarkRole>,
}

/// Keyboard navigator for one document
#[derive(Debug)]
pub struct Navigator {
    config: CompiledConfig,
    state: NavigationState<NodeId>,
    tracker: CollectionTracker,
    observer: ChangeObserver,
    /// Set by the observer callback, consumed after each batch
    stale: Rc<Cell<bool>>,
    attached: bool,
}

impl Navigator {
    pub fn new(config: CompiledConfig) -> Self {
        Self {
            config,
            state: NavigationState::new(),
            tracker: CollectionTracker::new(),
            observer: ChangeObserver::new(),
            stale: Rc::new(Cell::new(false)),
            attached: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.compile()?))
    }

    /// Start navigating `document`: inject the highlight style, build the
    /// collection and observe `<body>` for new elements.
    ///
    /// Attaching again only rebuilds the collection.
    pub fn attach(&mut self, document: &mut Document) -> DomResult<()> {
        if self.attached {
            self.rebuild(document.tree());
            return Ok(());
        }

        inject_highlight_style(document, &self.config.highlight)?;
        self.rebuild(document.tree());
        // Mutations before observation starts belong to no batch
        document.take_records();

        let root = if document.body().is_valid() {
            document.body()
        } else {
            document.tree().root()
        };
        let stale = Rc::clone(&self.stale);
        self.observer.watch(
            root,
            self.config.all.clone(),
            self.tracker.elements().iter().copied(),
            move |_| stale.set(true),
        );
        self.attached = true;
        tracing::debug!(elements = self.tracker.len(), "navigator attached");
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Re-query the whole document for accessible elements
    pub fn rebuild(&mut self, tree: &DomTree) -> usize {
        self.tracker.rebuild(tree, tree.root(), &self.config.all)
    }

    /// Deliver the document's pending mutations as one batch.
    ///
    /// Returns how many new elements were reported.
    pub fn on_mutations(&mut self, document: &mut Document) -> usize {
        let records = document.take_records();
        if records.is_empty() {
            return 0;
        }
        let fired = self.observer.process(document.tree(), &records);
        if self.stale.replace(false) {
            self.rebuild(document.tree());
        }
        fired
    }

    /// Handle a key press
    pub fn handle_key(&mut self, document: &mut Document, shortcut: &KeyboardShortcut) -> KeyOutcome {
        let Some(command) = self.config.shortcuts.command_for(shortcut) else {
            return KeyOutcome::default();
        };
        if command.is_guarded() && self.is_typing(document) {
            tracing::debug!(%command, "suppressed while a text input has focus");
            return KeyOutcome {
                command: Some(command),
                ..Default::default()
            };
        }

        self.execute(document, command);
        KeyOutcome {
            command: Some(command),
            handled: true,
            prevent_default: command.suppresses_default(),
        }
    }

    /// Run a command without the key lookup or input guard
    pub fn execute(&mut self, document: &mut Document, command: Command) {
        match command {
            Command::NavigateCategory(category) => {
                self.move_to_next(document, category);
            }
            Command::SetDirection(direction) => self.set_direction(direction),
            Command::JumpToTop => self.reset_to_top(document),
            Command::EscapeFocusedInput => {
                if self.is_typing(document) {
                    document.blur();
                }
            }
        }
    }

    /// Select the next element of `category` in the current direction
    pub fn move_to_next(&mut self, document: &mut Document, category: Category) -> Option<usize> {
        let mut host = DocumentHighlighter::new(document, &self.config);
        self.state.move_to_next(category, self.tracker.elements(), &mut host)
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    /// Clear the selection and scroll to the top of the document
    pub fn reset_to_top(&mut self, document: &mut Document) {
        let mut host = DocumentHighlighter::new(document, &self.config);
        self.state.reset_to_top(self.tracker.elements(), &mut host);
    }

    /// Whether the focused element is a text-input-like control
    pub fn is_typing(&self, document: &Document) -> bool {
        document
            .active_element()
            .and_then(|id| document.tree().tag_name(id))
            .is_some_and(is_text_input)
    }

    /// Describe the selected element, if the cursor is in bounds
    pub fn selection(&self, document: &Document) -> Option<Selection> {
        let index = self.state.cursor()?;
        let node = self.tracker.get(index)?;
        let tree = document.tree();
        let category = classify_node(tree, node, &self.config);
        let landmark = (category == Category::Landmark)
            .then(|| {
                tree.element(node).and_then(|e| {
                    e.get_attr("role")
                        .and_then(|role| LandmarkRole::parse(&role))
                        .or_else(|| LandmarkRole::implicit_for_tag(&e.tag_name))
                })
            })
            .flatten();
        Some(Selection {
            index,
            node,
            category,
            landmark,
        })
    }

    pub fn config(&self) -> &CompiledConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState<NodeId> {
        &self.state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    /// The tracked collection, in document order
    pub fn collection(&self) -> &[NodeId] {
        self.tracker.elements()
    }
}
