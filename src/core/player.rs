//! The two sides of a match.
//!
//! Positions themselves never name a side: they only distinguish the
//! mover from the non-mover. `Side` exists for the orchestrator, which has
//! to remember who is who across turns.

use serde::{Deserialize, Serialize};

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human (or external) player.
    Player,
    /// The automated side driven by the solver.
    Ai,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Both sides, player first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Player, Side::Ai].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "PLAYER"),
            Side::Ai => write!(f, "AI"),
        }
    }
}
