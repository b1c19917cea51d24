//! Arena-based position graph.
//!
//! Uses a flat `Vec<GraphNode>` with `NodeId` references, plus a canonical
//! index keyed by the position ordering so every distinct position is
//! stored exactly once.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, info};

use super::node::{Edge, GraphNode, NodeId};
use crate::rules::GamePosition;

/// Every position reachable from the start positions, with legal moves as
/// edges.
///
/// Built once by [`PositionGraph::build`] and read-only afterward.
#[derive(Clone, Debug)]
pub struct PositionGraph<P: GamePosition> {
    /// All nodes, in discovery order.
    nodes: Vec<GraphNode<P>>,

    /// Canonical position -> node.
    index: BTreeMap<P, NodeId>,

    /// Nodes of the start positions (deduplicated, in input order).
    roots: Vec<NodeId>,

    /// Wall time spent in `build` (microseconds).
    build_time_us: u64,
}

impl<P: GamePosition> PositionGraph<P> {
    /// Explore every position reachable from `start_positions`.
    ///
    /// Breadth-first; a position already in the index is never registered
    /// twice. Terminal positions are registered but not expanded. When
    /// several moves lead to the same successor only the first is kept as
    /// an edge.
    pub fn build(start_positions: impl IntoIterator<Item = P>) -> Self {
        let started = Instant::now();
        let mut graph = Self {
            nodes: Vec::with_capacity(1024),
            index: BTreeMap::new(),
            roots: Vec::new(),
            build_time_us: 0,
        };
        let mut frontier = VecDeque::new();

        for position in start_positions {
            let id = graph.intern(position, &mut frontier);
            if !graph.roots.contains(&id) {
                graph.roots.push(id);
            }
        }
        debug!(roots = graph.roots.len(), "exploring position graph");

        while let Some(id) = frontier.pop_front() {
            if graph.nodes[id.index()].is_terminal {
                continue;
            }

            let successors = graph.nodes[id.index()].position.successors();
            let mut edges: SmallVec<[Edge<P::Move>; 4]> = SmallVec::new();
            for (mv, next) in successors {
                let child = graph.intern(next, &mut frontier);
                if edges.iter().all(|e| e.child != child) {
                    edges.push(Edge::new(mv, child));
                }
            }
            graph.nodes[id.index()].edges = edges;
        }

        graph.build_time_us = started.elapsed().as_micros() as u64;
        let stats = graph.stats();
        info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            terminal = stats.terminal_count,
            time_us = graph.build_time_us,
            "position graph built"
        );
        graph
    }

    /// Register `position` unless an equal one already exists.
    ///
    /// New nodes are queued for expansion.
    fn intern(&mut self, position: P, frontier: &mut VecDeque<NodeId>) -> NodeId {
        if let Some(&id) = self.index.get(&position) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(GraphNode::new(position.clone()));
        self.index.insert(position, id);
        frontier.push_back(id);
        id
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GraphNode<P> {
        &self.nodes[id.index()]
    }

    /// Look up the node holding `position`.
    #[must_use]
    pub fn node_id(&self, position: &P) -> Option<NodeId> {
        self.index.get(position).copied()
    }

    /// Check if `position` was discovered.
    #[must_use]
    pub fn contains(&self, position: &P) -> bool {
        self.index.contains_key(position)
    }

    /// Nodes of the start positions.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wall time spent building (microseconds).
    #[must_use]
    pub fn build_time_us(&self) -> u64 {
        self.build_time_us
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GraphNode<P>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Reverse adjacency: for each node, the nodes with an edge into it.
    #[must_use]
    pub fn predecessors(&self) -> Vec<SmallVec<[NodeId; 4]>> {
        let mut preds = vec![SmallVec::new(); self.nodes.len()];
        for (id, node) in self.iter() {
            for child in node.children() {
                preds[child.index()].push(id);
            }
        }
        preds
    }

    /// Get statistics about the graph.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.nodes.iter().map(|n| n.edges.len()).sum(),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal).count(),
            root_count: self.roots.len(),
        }
    }
}

/// Statistics about a position graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Total number of edges (moves).
    pub edge_count: usize,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Number of distinct start positions.
    pub root_count: usize,
}

impl GraphStats {
    /// Get the branching factor (average edges per node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.edge_count as f64 / self.node_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::pounter::{CounterPair, PounterPosition};
    use crate::solver::testing::TableGame;

    #[test]
    fn test_build_table_game() {
        // 0 -> {1, 2}, 2 -> {3}, 3 -> {2}
        const TABLE: &[&[u8]] = &[&[1, 2], &[], &[3], &[2]];
        let graph = PositionGraph::build([TableGame::new(TABLE, 0)]);

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.roots(), &[NodeId::new(0)]);

        let stats = graph.stats();
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.branching_factor(), 1.0);
    }

    #[test]
    fn test_unreachable_nodes_are_skipped() {
        // Node 4 points into the graph but nothing reaches it.
        const TABLE: &[&[u8]] = &[&[1], &[], &[1], &[2], &[0]];
        let graph = PositionGraph::build([TableGame::new(TABLE, 0)]);

        assert_eq!(graph.len(), 2);
        assert!(!graph.contains(&TableGame::new(TABLE, 4)));
    }

    #[test]
    fn test_duplicate_roots_collapse() {
        const TABLE: &[&[u8]] = &[&[1], &[]];
        let graph = PositionGraph::build([TableGame::new(TABLE, 0), TableGame::new(TABLE, 0)]);

        assert_eq!(graph.roots().len(), 1);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_parallel_edges_merge() {
        // Two listed moves from 0 both land on 1.
        const TABLE: &[&[u8]] = &[&[1, 1], &[]];
        let graph = PositionGraph::build([TableGame::new(TABLE, 0)]);

        assert_eq!(graph.get(NodeId::new(0)).edges.len(), 1);
    }

    #[test]
    fn test_predecessors() {
        const TABLE: &[&[u8]] = &[&[1, 2], &[], &[1]];
        let graph = PositionGraph::build([TableGame::new(TABLE, 0)]);
        let preds = graph.predecessors();

        let id = |n| graph.node_id(&TableGame::new(TABLE, n)).unwrap();
        assert!(preds[id(0).index()].is_empty());
        assert_eq!(preds[id(1).index()].len(), 2);
        assert_eq!(preds[id(2).index()].as_slice(), &[id(0)]);
    }

    #[test]
    fn test_pounter_graph_is_closed_and_deduplicated() {
        let graph = PositionGraph::build(PounterPosition::starting_positions());

        assert!(graph.contains(&PounterPosition::start()));
        assert!(graph.len() > 1);

        for (id, node) in graph.iter() {
            assert_eq!(graph.node_id(&node.position), Some(id));
            if node.is_terminal {
                continue;
            }
            for (_, next) in node.position.successors() {
                let child = graph.node_id(&next).expect("successor must be registered");
                assert!(node.has_child(child));
            }
        }

        let mut positions: Vec<_> = graph.iter().map(|(_, n)| n.position).collect();
        positions.sort();
        positions.dedup();
        assert_eq!(positions.len(), graph.len());
    }

    #[test]
    fn test_pounter_graph_has_terminals() {
        let graph = PositionGraph::build(PounterPosition::starting_positions());
        let terminal = graph.iter().find(|(_, n)| n.is_terminal).map(|(_, n)| n.position);

        let terminal = terminal.expect("a win must be reachable");
        assert_eq!(terminal.non_mover(), CounterPair::ZERO);
        assert!(graph.get(graph.node_id(&terminal).unwrap()).edges.is_empty());
    }
}
