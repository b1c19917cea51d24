//! Retrograde classification.
//!
//! Labels every node of a built [`PositionGraph`] WIN, LOSE or TIE for the
//! side to move, then marks the TIE nodes that can never leave the TIE
//! region as proven draws.
//!
//! ## Algorithm
//!
//! 1. Terminal nodes (and nodes with no legal move) are LOSE.
//! 2. Labels propagate along reverse edges through a FIFO worklist: a
//!    node with a LOSE child becomes WIN; a node whose children are all WIN
//!    becomes LOSE.
//! 3. Nodes left unlabeled at the fixed point are TIE.
//! 4. Proven draws are the largest set of TIE nodes closed under
//!    successors: start from all TIE nodes and repeatedly drop any node
//!    with a child outside the set.
//!
//! Both passes are iterative, so cycles in the graph are harmless.

use std::collections::VecDeque;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::graph::PositionGraph;
use super::node::NodeId;
use super::stats::SolveStats;
use crate::core::Outcome;
use crate::error::{Error, Result};
use crate::rules::GamePosition;

/// Everything the classifier knows about one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Outcome for the side to move.
    pub outcome: Outcome,

    /// TIE locked into perpetual play. Always false for WIN/LOSE.
    pub is_draw: bool,

    /// Plies until the game ends under optimal play (`None` for TIE).
    /// Winners hurry, losers stall.
    pub plies_to_end: Option<u32>,
}

impl Classification {
    /// Sort key for choosing a move that leads to this node, best first.
    ///
    /// Orders by the outcome for the side making the move, then prefers an
    /// undetermined TIE over a proven draw, then the fastest win or the
    /// slowest loss.
    #[must_use]
    pub fn move_rank(&self) -> (Outcome, bool, i64) {
        let for_mover = self.outcome.flip();
        let plies = i64::from(self.plies_to_end.unwrap_or(0));
        let tempo = match for_mover {
            Outcome::Win => plies,
            Outcome::Tie => 0,
            Outcome::Lose => -plies,
        };
        (for_mover, self.is_draw, tempo)
    }
}

/// A candidate move with the classification of the position it leads to.
#[derive(Clone, Debug)]
pub struct RankedMove<P: GamePosition> {
    /// The move.
    pub mv: P::Move,

    /// Resulting position (the opponent moves next).
    pub position: P,

    /// Classification of `position`, from the opponent's point of view.
    pub classification: Classification,
}

/// A position graph together with its classification.
///
/// Immutable once built; share it behind an `Arc` for concurrent readers.
#[derive(Clone, Debug)]
pub struct ClassifiedGraph<P: GamePosition> {
    graph: PositionGraph<P>,
    labels: Vec<Classification>,
    stats: SolveStats,
}

impl<P: GamePosition> ClassifiedGraph<P> {
    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &PositionGraph<P> {
        &self.graph
    }

    /// Summary counts and timings.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Number of classified nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if nothing was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Classification of a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Classification {
        self.labels[id.index()]
    }

    /// Classification of a position.
    ///
    /// Positions not discovered while building the graph are rejected; the
    /// classifier never labels on demand.
    pub fn classification(&self, position: &P) -> Result<Classification> {
        self.graph
            .node_id(position)
            .map(|id| self.get(id))
            .ok_or_else(|| Error::UnknownPosition {
                position: format!("{position:?}"),
            })
    }

    /// Outcome label of a position for its mover.
    pub fn position_type(&self, position: &P) -> Result<Outcome> {
        Ok(self.classification(position)?.outcome)
    }

    /// Whether a position is a proven draw.
    pub fn is_draw(&self, position: &P) -> Result<bool> {
        Ok(self.classification(position)?.is_draw)
    }

    /// Legal moves from `position`, best first for its mover.
    ///
    /// Equally ranked moves keep their enumeration order.
    pub fn ranked_moves(&self, position: &P) -> Result<Vec<RankedMove<P>>> {
        let mut moves = position
            .successors()
            .into_iter()
            .map(|(mv, next)| {
                let classification = self.classification(&next)?;
                Ok(RankedMove {
                    mv,
                    position: next,
                    classification,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        moves.sort_by_key(|m| m.classification.move_rank());
        Ok(moves)
    }

    /// The best move from `position`, if any move is legal.
    pub fn best_move(&self, position: &P) -> Result<Option<RankedMove<P>>> {
        Ok(self.ranked_moves(position)?.into_iter().next())
    }

    /// Iterate over `(node, classification)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Classification)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, c)| (NodeId::new(i as u32), *c))
    }
}

/// Classify every node of `graph`.
pub fn classify<P: GamePosition>(graph: PositionGraph<P>) -> ClassifiedGraph<P> {
    let started = Instant::now();
    let preds = graph.predecessors();
    let n = graph.len();

    let mut outcome: Vec<Option<Outcome>> = vec![None; n];
    let mut plies = vec![0u32; n];
    let mut pending: Vec<usize> = graph.iter().map(|(_, node)| node.edges.len()).collect();
    let mut queue = VecDeque::new();

    for (id, node) in graph.iter() {
        if node.is_terminal || node.edges.is_empty() {
            outcome[id.index()] = Some(Outcome::Lose);
            queue.push_back(id);
        }
    }
    debug!(seeds = queue.len(), "retrograde seeds");

    // FIFO order visits nodes by nondecreasing distance to the end, so the
    // first LOSE child seen is the nearest and the last WIN child the
    // farthest.
    while let Some(id) = queue.pop_front() {
        let label = outcome[id.index()];
        for &pred in &preds[id.index()] {
            let p = pred.index();
            if outcome[p].is_some() {
                continue;
            }
            match label {
                Some(Outcome::Lose) => {
                    outcome[p] = Some(Outcome::Win);
                    plies[p] = plies[id.index()] + 1;
                    queue.push_back(pred);
                }
                Some(Outcome::Win) => {
                    pending[p] -= 1;
                    if pending[p] == 0 {
                        outcome[p] = Some(Outcome::Lose);
                        plies[p] = plies[id.index()] + 1;
                        queue.push_back(pred);
                    }
                }
                _ => {}
            }
        }
    }

    let outcome: Vec<Outcome> = outcome.into_iter().map(|o| o.unwrap_or(Outcome::Tie)).collect();
    let is_draw = proven_draws(&graph, &preds, &outcome);

    let labels: Vec<Classification> = (0..n)
        .map(|i| Classification {
            outcome: outcome[i],
            is_draw: is_draw[i],
            plies_to_end: outcome[i].is_decided().then_some(plies[i]),
        })
        .collect();

    let graph_stats = graph.stats();
    let stats = SolveStats {
        node_count: graph_stats.node_count,
        edge_count: graph_stats.edge_count,
        terminal_count: graph_stats.terminal_count,
        wins: count(&outcome, Outcome::Win),
        losses: count(&outcome, Outcome::Lose),
        ties: count(&outcome, Outcome::Tie),
        proven_draws: is_draw.iter().filter(|&&d| d).count(),
        build_time_us: graph.build_time_us(),
        classify_time_us: started.elapsed().as_micros() as u64,
    };
    info!(
        wins = stats.wins,
        losses = stats.losses,
        ties = stats.ties,
        proven_draws = stats.proven_draws,
        time_us = stats.classify_time_us,
        "position graph classified"
    );

    ClassifiedGraph { graph, labels, stats }
}

/// Largest successor-closed subset of the TIE nodes.
fn proven_draws<P: GamePosition>(
    graph: &PositionGraph<P>,
    preds: &[smallvec::SmallVec<[NodeId; 4]>],
    outcome: &[Outcome],
) -> Vec<bool> {
    let mut draw: Vec<bool> = outcome.iter().map(|&o| o == Outcome::Tie).collect();
    let mut queue = VecDeque::new();

    for (id, node) in graph.iter() {
        if draw[id.index()] && node.children().any(|c| outcome[c.index()] != Outcome::Tie) {
            draw[id.index()] = false;
            queue.push_back(id);
        }
    }

    while let Some(id) = queue.pop_front() {
        for &pred in &preds[id.index()] {
            if draw[pred.index()] {
                draw[pred.index()] = false;
                queue.push_back(pred);
            }
        }
    }

    draw
}

fn count(outcome: &[Outcome], label: Outcome) -> usize {
    outcome.iter().filter(|&&o| o == label).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::testing::TableGame;

    //  0 -> {1, 2}    1: terminal
    //  2 <-> 3        closed tie cycle
    //  4 -> {3, 5}    5 -> {4}: tie cycle with an exit into WIN node 6
    //  6 -> {1}       7 -> {6}
    //  8 -> {4, 7}
    const TABLE: &[&[u8]] = &[
        &[1, 2],
        &[],
        &[3],
        &[2],
        &[3, 5, 6],
        &[4],
        &[1],
        &[6],
        &[4, 7],
    ];

    fn solved() -> ClassifiedGraph<TableGame> {
        classify(PositionGraph::build([TableGame::new(TABLE, 0), TableGame::new(TABLE, 8)]))
    }

    fn label(graph: &ClassifiedGraph<TableGame>, node: u8) -> Classification {
        graph.classification(&TableGame::new(TABLE, node)).unwrap()
    }

    #[test]
    fn test_terminal_is_lose() {
        let graph = solved();
        let c = label(&graph, 1);
        assert_eq!(c.outcome, Outcome::Lose);
        assert_eq!(c.plies_to_end, Some(0));
        assert!(!c.is_draw);
    }

    #[test]
    fn test_win_and_lose_propagation() {
        let graph = solved();

        assert_eq!(label(&graph, 0).outcome, Outcome::Win);
        assert_eq!(label(&graph, 0).plies_to_end, Some(1));
        assert_eq!(label(&graph, 6).outcome, Outcome::Win);
        assert_eq!(label(&graph, 7).outcome, Outcome::Lose);
        assert_eq!(label(&graph, 7).plies_to_end, Some(2));
        assert_eq!(label(&graph, 8).outcome, Outcome::Win);
        assert_eq!(label(&graph, 8).plies_to_end, Some(3));
    }

    #[test]
    fn test_closed_cycle_is_proven_draw() {
        let graph = solved();

        for node in [2, 3] {
            let c = label(&graph, node);
            assert_eq!(c.outcome, Outcome::Tie);
            assert!(c.is_draw, "node {node} should be a proven draw");
            assert_eq!(c.plies_to_end, None);
        }
    }

    #[test]
    fn test_tie_with_exit_is_not_draw() {
        let graph = solved();

        // 4 can still blunder into 6; 5 only reaches 4.
        for node in [4, 5] {
            let c = label(&graph, node);
            assert_eq!(c.outcome, Outcome::Tie);
            assert!(!c.is_draw, "node {node} should stay undetermined");
        }
    }

    #[test]
    fn test_stats_counts() {
        let stats = solved().stats().clone();

        assert_eq!(stats.node_count, 9);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.ties, 4);
        assert_eq!(stats.proven_draws, 2);
    }

    #[test]
    fn test_ranked_moves_prefer_undetermined_tie() {
        let graph = solved();
        let ranked = graph.ranked_moves(&TableGame::new(TABLE, 4)).unwrap();

        let order: Vec<u8> = ranked.iter().map(|m| m.position.node()).collect();
        // 5 is an open tie, 3 a proven draw, 6 hands the opponent a win.
        assert_eq!(order, vec![5, 3, 6]);
    }

    #[test]
    fn test_ranked_moves_prefer_win() {
        let graph = solved();
        let best = graph.best_move(&TableGame::new(TABLE, 0)).unwrap().unwrap();
        assert_eq!(best.position.node(), 1);
        assert_eq!(best.classification.move_rank().0, Outcome::Win);
    }

    #[test]
    fn test_unknown_position_is_error() {
        let graph = classify(PositionGraph::build([TableGame::new(TABLE, 1)]));

        assert_eq!(graph.len(), 1);
        let result = graph.position_type(&TableGame::new(TABLE, 0));
        assert!(matches!(result, Err(Error::UnknownPosition { .. })));
        assert!(graph.is_draw(&TableGame::new(TABLE, 2)).is_err());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let graph = solved();
        for node in 0..TABLE.len() as u8 {
            let position = TableGame::new(TABLE, node);
            assert_eq!(graph.classification(&position).unwrap(), graph.classification(&position).unwrap());
        }
    }

    #[test]
    fn test_move_rank_tempo() {
        let fast = Classification { outcome: Outcome::Lose, is_draw: false, plies_to_end: Some(0) };
        let slow = Classification { outcome: Outcome::Lose, is_draw: false, plies_to_end: Some(4) };
        assert!(fast.move_rank() < slow.move_rank());

        let short_loss = Classification { outcome: Outcome::Win, is_draw: false, plies_to_end: Some(1) };
        let long_loss = Classification { outcome: Outcome::Win, is_draw: false, plies_to_end: Some(5) };
        assert!(long_loss.move_rank() < short_loss.move_rank());

        let open = Classification { outcome: Outcome::Tie, is_draw: false, plies_to_end: None };
        let draw = Classification { outcome: Outcome::Tie, is_draw: true, plies_to_end: None };
        assert!(open.move_rank() < draw.move_rank());
        assert!(slow.move_rank() < open.move_rank());
        assert!(draw.move_rank() < long_loss.move_rank());
    }
}
