//! Position graph node and edge structures.
//!
//! Uses arena-based allocation with index references (NodeId) so edges and
//! labels never depend on where a position lives in memory.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::GamePosition;

/// Index into the position graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena slot for this ID.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Edge representing a legal move from a node to its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<M> {
    /// The move this edge represents.
    pub mv: M,

    /// Successor node.
    pub child: NodeId,
}

impl<M> Edge<M> {
    /// Create a new edge.
    pub fn new(mv: M, child: NodeId) -> Self {
        Self { mv, child }
    }
}

/// A node in the position graph.
#[derive(Clone, Debug)]
pub struct GraphNode<P: GamePosition> {
    /// The position this node stands for.
    pub position: P,

    /// Is the game already decided here?
    pub is_terminal: bool,

    /// Outgoing edges, one per distinct successor.
    /// Terminal nodes are never expanded and keep this empty.
    pub edges: SmallVec<[Edge<P::Move>; 4]>,
}

impl<P: GamePosition> GraphNode<P> {
    /// Create an unexpanded node.
    pub fn new(position: P) -> Self {
        let is_terminal = position.is_terminal();
        Self {
            position,
            is_terminal,
            edges: SmallVec::new(),
        }
    }

    /// Check if an edge to `child` already exists.
    #[must_use]
    pub fn has_child(&self, child: NodeId) -> bool {
        self.edges.iter().any(|e| e.child == child)
    }

    /// Successor node IDs.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().map(|e| e.child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::pounter::{CounterPair, PounterMove, PounterPosition, Slot};

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "NodeId(5)");
    }

    #[test]
    fn test_node_new_reads_terminality() {
        let node = GraphNode::new(PounterPosition::start());
        assert!(!node.is_terminal);
        assert!(node.edges.is_empty());

        let terminal = PounterPosition::new(CounterPair::new(1, 1), CounterPair::ZERO);
        assert!(GraphNode::new(terminal).is_terminal);
    }

    #[test]
    fn test_node_children() {
        let mut node = GraphNode::new(PounterPosition::start());
        node.edges.push(Edge::new(PounterMove::new(Slot::Smaller, Slot::Smaller), NodeId::new(3)));
        node.edges.push(Edge::new(PounterMove::new(Slot::Larger, Slot::Larger), NodeId::new(7)));

        assert!(node.has_child(NodeId::new(3)));
        assert!(!node.has_child(NodeId::new(4)));
        assert_eq!(node.children().collect::<Vec<_>>(), vec![NodeId::new(3), NodeId::new(7)]);
    }

    #[test]
    fn test_edge_serialization() {
        let edge = Edge::new(PounterMove::new(Slot::Larger, Slot::Smaller), NodeId::new(9));
        let json = serde_json::to_string(&edge).unwrap();
        let deserialized: Edge<PounterMove> = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, deserialized);
    }
}
