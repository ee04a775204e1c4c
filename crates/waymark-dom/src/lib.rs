//! Waymark DOM - Document Object Model
//!
//! Arena-based DOM tree the navigator runs against. Holds the pieces of
//! the host page the navigator consumes: node tree, selector matching,
//! class lists, offset geometry, mutation records, focus and scroll.

mod node;
mod tree;
mod document;
mod selector;
mod classlist;
mod geometry;
mod observer;

pub use node::{Node, NodeData, ElementData, Attribute};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use selector::{SelectorList, CompoundSelector, SimpleSelector, AttributeSelector, SelectorError};
pub use classlist::ClassList;
pub use geometry::{OffsetGeometry, document_offset_top};
pub use observer::{MutationRecord, MutationType, MutationObserverInit};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Build an id from a raw arena index
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check the id is not the `NONE` sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Hierarchy request error")]
    HierarchyRequest,

    #[error("Node {0:?} is not a child of {1:?}")]
    NotAChild(NodeId, NodeId),

    #[error("Invalid node type for {0:?}")]
    InvalidNodeType(NodeId),
}
