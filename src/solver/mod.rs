//! Exhaustive solver: position graph construction and retrograde
//! classification.
//!
//! ## Usage
//!
//! ```rust
//! use pounter::core::Outcome;
//! use pounter::games::pounter::PounterPosition;
//! use pounter::solver::build_and_classify;
//!
//! let solved = build_and_classify(PounterPosition::starting_positions());
//!
//! let start = PounterPosition::start();
//! let outcome = solved.position_type(&start).unwrap();
//! assert!(matches!(outcome, Outcome::Win | Outcome::Tie | Outcome::Lose));
//!
//! if let Some(best) = solved.best_move(&start).unwrap() {
//!     println!("best move: {}", best.mv);
//! }
//! ```

pub mod classify;
pub mod graph;
pub mod node;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{classify, Classification, ClassifiedGraph, RankedMove};
pub use graph::{GraphStats, PositionGraph};
pub use node::{Edge, GraphNode, NodeId};
pub use stats::SolveStats;

use crate::rules::GamePosition;

/// Explore everything reachable from `start_positions` and classify it.
///
/// This is the only expensive step; the result is immutable and can be
/// shared read-only by any number of consumers.
pub fn build_and_classify<P: GamePosition>(
    start_positions: impl IntoIterator<Item = P>,
) -> ClassifiedGraph<P> {
    classify(PositionGraph::build(start_positions))
}
