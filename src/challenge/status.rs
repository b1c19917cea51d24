//! Live match status.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::games::pounter::{CounterPair, PounterMove, PounterPosition};

/// Whose turn it is.
pub type Turn = Side;

/// Snapshot of a match: both sides' counters and whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    /// Player's counters.
    pub player: CounterPair,

    /// AI's counters.
    pub ai: CounterPair,

    /// Side to move.
    pub turn: Turn,
}

impl Status {
    /// Create a status snapshot.
    #[must_use]
    pub const fn new(player: CounterPair, ai: CounterPair, turn: Turn) -> Self {
        Self { player, ai, turn }
    }

    /// Counters held by `side`.
    #[must_use]
    pub const fn pair(&self, side: Side) -> CounterPair {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    fn pair_mut(&mut self, side: Side) -> &mut CounterPair {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// The solver's view: mover is the side whose turn it is.
    #[must_use]
    pub const fn to_position(&self) -> PounterPosition {
        PounterPosition::new(self.pair(self.turn), self.pair(self.turn.other()))
    }

    /// Apply `mv` for the side to move and pass the turn.
    ///
    /// Returns `false` and leaves the status untouched if the move selects
    /// a zero counter.
    pub fn apply(&mut self, mv: PounterMove) -> bool {
        match self.to_position().play(mv) {
            Some(next) => {
                *self.pair_mut(self.turn) = next.non_mover();
                self.turn = self.turn.other();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{Player{{{}, {}}}, AI{{{}, {}}}, {}}}",
            self.player.smaller(),
            self.player.larger(),
            self.ai.smaller(),
            self.ai.larger(),
            self.turn
        )
    }
}
