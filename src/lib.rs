//! # pounter
//!
//! Exhaustive solver and optimal AI for a two-player counting game.
//!
//! Each side holds an unordered pair of counters in `0..=9`. On a turn the
//! mover adds one of the opponent's nonzero counters to one of its own
//! nonzero counters, modulo 10. Whoever drives their own pair to exactly
//! `(0, 0)` wins.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Solver**: The graph builder and classifier only see
//!    the `GamePosition` trait. The counter game is one implementation.
//!
//! 2. **Solve Once, Read Forever**: `build_and_classify` explores and labels
//!    the whole state space eagerly. The result is immutable and shared
//!    behind an `Arc`.
//!
//! 3. **Cycle-Safe**: Labels propagate through worklists along reverse
//!    edges, never by recursion, so cyclic (drawn) play terminates.
//!
//! ## Modules
//!
//! - `core`: Sides, outcome labels, RNG
//! - `rules`: The `GamePosition` trait
//! - `games`: The counter-pair game
//! - `solver`: Position graph, retrograde classification, move ranking
//! - `challenge`: Match orchestration and self-play

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod solver;
pub mod challenge;

// Re-export commonly used types
pub use crate::core::{GameRng, Outcome, Side};

pub use crate::error::{Error, Result};

pub use crate::rules::{GamePosition, Successors};

pub use crate::games::pounter::{CounterPair, PounterMove, PounterPosition, Slot};

pub use crate::solver::{
    build_and_classify, classify,
    Classification, ClassifiedGraph, RankedMove,
    PositionGraph, GraphStats, GraphNode, Edge, NodeId,
    SolveStats,
};

pub use crate::challenge::{
    Challenge, ChallengeConfig, GameEnd, PounterSolver,
    SelfPlay, SelfPlayConfig, OpponentKind,
    MatchRecord, MatchResult, MatchStep, SeriesSummary,
    Status, Turn,
};
