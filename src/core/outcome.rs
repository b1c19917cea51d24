//! Game-theoretic outcome labels.

use serde::{Deserialize, Serialize};

/// Outcome of a position for the side to move, under optimal play.
///
/// The derived ordering is best-first: `Win < Tie < Lose`. Sorting a list
/// of outcomes ascending therefore puts the most desirable one first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mover can force a win.
    Win,
    /// Neither side can force a decision.
    Tie,
    /// The mover cannot avoid losing.
    Lose,
}

impl Outcome {
    /// The same position seen by the side that just moved into it.
    ///
    /// A successor labeled `Lose` is a winning move for whoever played it.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Tie => Outcome::Tie,
            Outcome::Lose => Outcome::Win,
        }
    }

    /// Whether the outcome is forced one way or the other.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Tie => write!(f, "TIE"),
            Outcome::Lose => write!(f, "LOSE"),
        }
    }
}
