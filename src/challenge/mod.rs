//! Match orchestration on top of the solved graph.
//!
//! The orchestrator consumes the solver through three read-only queries
//! (successors, outcome label, draw flag). It tracks whose turn it is,
//! applies moves to a [`Status`] snapshot, and reports the winner when a
//! pair reaches `(0, 0)` or a deadlock when a proven draw is reached.

pub mod config;
pub mod game;
pub mod self_play;
pub mod status;

pub use config::{ChallengeConfig, OpponentKind, SelfPlayConfig};
pub use game::{Challenge, GameEnd, PounterSolver};
pub use self_play::{MatchRecord, MatchResult, MatchStep, SelfPlay, SeriesSummary};
pub use status::{Status, Turn};
