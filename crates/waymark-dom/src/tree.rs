//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a removed node keeps its id and may be inserted
//! again, so a `NodeId` is a stable identity for the lifetime of the tree.

use crate::{
    DomError, DomResult, ElementData, MutationRecord, Node, NodeId, SelectorList,
    document_offset_top,
};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    records: Vec<MutationRecord>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            records: Vec::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree only holds the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(Node::element(tag_name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Element data for `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Lower-cased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag_name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Iterate descendants of `root` in document (pre-order) order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root,
            next: self.get(root).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Inclusive ancestor check
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Whether `id` is attached under the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root(), id)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|d| self.get(d).and_then(Node::as_text))
            .collect()
    }

    fn check(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Append a child node, moving it if already attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        if !self.check(parent)?.is_container() {
            return Err(DomError::InvalidNodeType(parent));
        }
        if matches!(self.check(child)?.data, crate::NodeData::Document) {
            return Err(DomError::InvalidNodeType(child));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        if let Some(reference) = reference {
            if self.check(reference)?.parent != parent {
                return Err(DomError::NotAChild(reference, parent));
            }
            if reference == child {
                return Ok(child);
            }
        }

        self.detach(child);

        let next = reference.unwrap_or(NodeId::NONE);
        let prev = match reference {
            Some(r) => self.nodes[r.index()].prev_sibling,
            None => self.nodes[parent.index()].last_child,
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }

        self.records
            .push(MutationRecord::child_list(parent, vec![child], Vec::new()).with_siblings(prev, next));
        Ok(child)
    }

    /// Remove a child node
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check(parent)?;
        if self.check(child)?.parent != parent {
            return Err(DomError::NotAChild(child, parent));
        }
        self.detach(child);
        Ok(child)
    }

    /// Remove every child of `parent`
    pub fn clear_children(&mut self, parent: NodeId) -> DomResult<()> {
        self.check(parent)?;
        let children: Vec<NodeId> = self.children(parent).collect();
        for child in children {
            self.detach(child);
        }
        Ok(())
    }

    /// Unlink a node from its parent, recording the removal
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;

        self.records
            .push(MutationRecord::child_list(parent, Vec::new(), vec![id]).with_siblings(prev, next));
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let elem = self.element_mut(id).ok_or(DomError::InvalidNodeType(id))?;
        let old = elem.set_attr(name, value);
        self.records.push(MutationRecord::attribute(id, name, old));
        Ok(())
    }

    /// Set the offset geometry reported by the host layout
    pub fn set_offset(&mut self, id: NodeId, offset_top: f64, offset_parent: Option<NodeId>) -> DomResult<()> {
        let elem = self.element_mut(id).ok_or(DomError::InvalidNodeType(id))?;
        elem.geometry.offset_top = offset_top;
        elem.geometry.offset_parent = offset_parent;
        Ok(())
    }

    /// Distance from the top of the document to an element
    pub fn document_offset_top(&self, id: NodeId) -> f64 {
        document_offset_top(
            id,
            |n| self.element(n).and_then(|e| e.geometry.offset_parent),
            |n| self.element(n).map(|e| e.geometry.offset_top).unwrap_or(0.0),
        )
    }

    /// Whether element `id` matches the selector list
    pub fn matches(&self, id: NodeId, selectors: &SelectorList) -> bool {
        self.element(id).is_some_and(|e| selectors.matches(e))
    }

    /// All elements under `root` matching `selectors`, in document order
    pub fn query_selector_all(&self, root: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| self.matches(id, selectors))
            .collect()
    }

    /// Drain queued mutation records
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn has_pending_records(&self) -> bool {
        !self.records.is_empty()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        Some(current)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        let node = self.tree.get(current)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a node with a next sibling, stopping at the root
            let mut cursor = current;
            loop {
                if cursor == self.root || !cursor.is_valid() {
                    break NodeId::NONE;
                }
                match self.tree.get(cursor) {
                    Some(n) if n.next_sibling.is_valid() => break n.next_sibling,
                    Some(n) => cursor = n.parent,
                    None => break NodeId::NONE,
                }
            }
        };
        Some(current)
    }
}
