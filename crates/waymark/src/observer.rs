//! Change Observer
//!
//! Watches a subtree for structural mutations and reports each newly
//! appearing element that matches a watched selector exactly once.
//!
//! All watches share one subscription, created by the first `watch` call.
//! Every relevant batch re-queries from the root, so a replaced or emptied
//! root simply yields no matches. The only state kept between batches is
//! each watch's initial "seen" set and its "already notified" set.

use std::collections::HashSet;
use std::fmt;

use waymark_dom::{DomTree, MutationObserverInit, MutationRecord, NodeId, SelectorList};

/// Handle returned by [`ChangeObserver::watch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(usize);

struct Subscription {
    root: NodeId,
    options: MutationObserverInit,
}

struct Watch {
    selector: SelectorList,
    seen: HashSet<NodeId>,
    notified: HashSet<NodeId>,
    on_new_element: Box<dyn FnMut(NodeId)>,
}

/// Subtree mutation observer
#[derive(Default)]
pub struct ChangeObserver {
    subscription: Option<Subscription>,
    watches: Vec<Watch>,
}

impl ChangeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for new elements matching `selector` under `root`.
    ///
    /// Nodes in `initially_present` never trigger the callback.
    pub fn watch<I, F>(
        &mut self,
        root: NodeId,
        selector: SelectorList,
        initially_present: I,
        on_new_element: F,
    ) -> WatchId
    where
        I: IntoIterator<Item = NodeId>,
        F: FnMut(NodeId) + 'static,
    {
        if let Some(subscription) = &mut self.subscription {
            if subscription.root != root {
                tracing::debug!(from = ?subscription.root, to = ?root, "watched region changed");
                subscription.root = root;
            }
        } else {
            tracing::debug!(?root, "observing subtree mutations");
            self.subscription = Some(Subscription {
                root,
                options: MutationObserverInit::subtree_child_list(),
            });
        }

        let id = WatchId(self.watches.len());
        self.watches.push(Watch {
            selector,
            seen: initially_present.into_iter().collect(),
            notified: HashSet::new(),
            on_new_element: Box::new(on_new_element),
        });
        id
    }

    /// Root of the shared subscription, once one exists
    pub fn root(&self) -> Option<NodeId> {
        self.subscription.as_ref().map(|s| s.root)
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Drop the subscription and every watch
    pub fn disconnect(&mut self) {
        self.subscription = None;
        self.watches.clear();
    }

    /// Deliver one batch of mutation records.
    ///
    /// Returns how many callbacks fired.
    pub fn process(&mut self, tree: &DomTree, records: &[MutationRecord]) -> usize {
        let Some(subscription) = &self.subscription else {
            return 0;
        };
        let root = subscription.root;
        if !records.iter().any(|r| subscription.options.wants(r, root, tree)) {
            return 0;
        }

        let mut fired = 0;
        for watch in &mut self.watches {
            for node in tree.query_selector_all(root, &watch.selector) {
                if watch.seen.contains(&node) || !watch.notified.insert(node) {
                    continue;
                }
                tracing::trace!(?node, "new element");
                (watch.on_new_element)(node);
                fired += 1;
            }
        }
        fired
    }
}

impl fmt::Debug for ChangeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeObserver")
            .field("root", &self.root())
            .field("watches", &self.watches.len())
            .finish()
    }
}
