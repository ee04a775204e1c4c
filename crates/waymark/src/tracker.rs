//! Collection Tracker
//!
//! Ordered snapshot of every accessible element. Rebuilt wholesale rather
//! than patched, so the order always equals document order.

use waymark_dom::{DomTree, NodeId, SelectorList};

/// Query `root` for every node matching `selectors`, in document order
pub fn collect(tree: &DomTree, root: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
    tree.query_selector_all(root, selectors)
}

/// Tracked collection of accessible elements
#[derive(Debug, Default)]
pub struct CollectionTracker {
    elements: Vec<NodeId>,
    generation: u64,
}

impl CollectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a fresh query; returns the new length
    pub fn rebuild(&mut self, tree: &DomTree, root: NodeId, selectors: &SelectorList) -> usize {
        self.elements = collect(tree, root, selectors);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            count = self.elements.len(),
            "rebuilt accessible collection"
        );
        self.elements.len()
    }

    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.elements.get(index).copied()
    }

    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.elements.iter().position(|&n| n == node)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
