//! Mutation records
//!
//! The tree queues a record for every structural change; observers drain
//! the queue and decide which records fall inside their watched region.

use crate::{DomTree, NodeId};

/// Mutation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    Attributes,
    ChildList,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRecord {
    pub mutation_type: MutationType,
    pub target: NodeId,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
    pub previous_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub attribute_name: Option<String>,
    pub old_value: Option<String>,
}

impl MutationRecord {
    pub fn child_list(target: NodeId, added: Vec<NodeId>, removed: Vec<NodeId>) -> Self {
        Self {
            mutation_type: MutationType::ChildList,
            target,
            added_nodes: added,
            removed_nodes: removed,
            previous_sibling: None,
            next_sibling: None,
            attribute_name: None,
            old_value: None,
        }
    }

    pub fn attribute(target: NodeId, name: &str, old_value: Option<String>) -> Self {
        Self {
            mutation_type: MutationType::Attributes,
            target,
            added_nodes: Vec::new(),
            removed_nodes: Vec::new(),
            previous_sibling: None,
            next_sibling: None,
            attribute_name: Some(name.to_string()),
            old_value,
        }
    }

    pub fn with_siblings(mut self, previous: NodeId, next: NodeId) -> Self {
        self.previous_sibling = previous.is_valid().then_some(previous);
        self.next_sibling = next.is_valid().then_some(next);
        self
    }
}

/// Mutation observer options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationObserverInit {
    pub child_list: bool,
    pub attributes: bool,
    pub subtree: bool,
}

impl MutationObserverInit {
    /// Child additions/removals anywhere under the observed node
    pub fn subtree_child_list() -> Self {
        Self {
            child_list: true,
            subtree: true,
            ..Default::default()
        }
    }

    /// Whether `record` is visible to an observation of `target` with these options
    pub fn wants(&self, record: &MutationRecord, target: NodeId, tree: &DomTree) -> bool {
        let matches_type = match record.mutation_type {
            MutationType::Attributes => self.attributes,
            MutationType::ChildList => self.child_list,
        };
        if !matches_type {
            return false;
        }
        if record.target == target {
            return true;
        }
        self.subtree && tree.contains(target, record.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtree_scope() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let section = tree.create_element("section");
        tree.append_child(tree.root(), body).unwrap();
        tree.append_child(body, section).unwrap();

        let deep = MutationRecord::child_list(section, vec![], vec![]);
        let direct = MutationObserverInit {
            child_list: true,
            ..Default::default()
        };
        assert!(!direct.wants(&deep, body, &tree));
        assert!(MutationObserverInit::subtree_child_list().wants(&deep, body, &tree));
    }

    #[test]
    fn test_type_filter() {
        let tree = DomTree::new();
        let record = MutationRecord::attribute(tree.root(), "class", None);
        assert!(!MutationObserverInit::subtree_child_list().wants(&record, tree.root(), &tree));
    }
}
