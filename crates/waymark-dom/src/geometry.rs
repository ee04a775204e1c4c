//! Geometry
//!
//! Offset properties and the document-relative top offset used when
//! centring a selected element in the viewport.

use crate::NodeId;

/// Element offset geometry (relative to `offset_parent`)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetGeometry {
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_height: f64,
    pub offset_parent: Option<NodeId>,
}

/// Distance from the top of the document to `element`.
///
/// Walks the offset-parent chain summing each `offset_top`. Stops early if
/// the chain revisits a node.
pub fn document_offset_top<P, T>(element: NodeId, get_offset_parent: P, get_offset_top: T) -> f64
where
    P: Fn(NodeId) -> Option<NodeId>,
    T: Fn(NodeId) -> f64,
{
    let mut total = 0.0;
    let mut visited = Vec::new();
    let mut current = Some(element);
    while let Some(id) = current {
        if visited.contains(&id) {
            tracing::warn!(?id, "offset parent chain loops");
            break;
        }
        visited.push(id);
        total += get_offset_top(id);
        current = get_offset_parent(id);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sums_chain() {
        // 3 -> 2 -> 1
        let parents: HashMap<u32, u32> = [(3, 2), (2, 1)].into_iter().collect();
        let tops: HashMap<u32, f64> = [(1, 10.0), (2, 25.0), (3, 40.0)].into_iter().collect();

        let top = document_offset_top(
            NodeId(3),
            |id| parents.get(&id.0).map(|&p| NodeId(p)),
            |id| tops[&id.0],
        );
        assert_eq!(top, 75.0);
    }

    #[test]
    fn test_no_parent() {
        assert_eq!(document_offset_top(NodeId(1), |_| None, |_| 12.5), 12.5);
    }

    #[test]
    fn test_cycle_terminates() {
        let top = document_offset_top(
            NodeId(1),
            |id| Some(if id.0 == 1 { NodeId(2) } else { NodeId(1) }),
            |_| 5.0,
        );
        assert_eq!(top, 10.0);
    }
}
