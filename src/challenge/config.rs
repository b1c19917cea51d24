//! Match and self-play configuration.

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::core::Side;
use crate::games::pounter::{CounterPair, PounterPosition};

/// Configuration for a [`Challenge`](super::Challenge).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Does the player move first after a reset?
    pub player_first: bool,

    /// Player's counters at the start of every match.
    pub player_start: CounterPair,

    /// AI's counters at the start of every match.
    pub ai_start: CounterPair,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            player_first: true,
            player_start: CounterPair::new(1, 1),
            ai_start: CounterPair::new(1, 1),
        }
    }
}

impl ChallengeConfig {
    /// Create a config with the standard `(1, 1)` opening.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set who moves first.
    pub fn with_player_first(mut self, player_first: bool) -> Self {
        self.player_first = player_first;
        self
    }

    /// Set the starting counters of both sides.
    pub fn with_start(mut self, player: CounterPair, ai: CounterPair) -> Self {
        self.player_start = player;
        self.ai_start = ai;
        self
    }

    /// Status at the start of a match.
    #[must_use]
    pub fn start_status(&self, player_first: bool) -> Status {
        let turn = if player_first { Side::Player } else { Side::Ai };
        Status::new(self.player_start, self.ai_start, turn)
    }

    /// Start positions for the solver: one per possible first mover.
    #[must_use]
    pub fn start_positions(&self) -> Vec<PounterPosition> {
        vec![
            PounterPosition::new(self.player_start, self.ai_start),
            PounterPosition::new(self.ai_start, self.player_start),
        ]
    }
}

/// How the side not controlled by the solver picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    /// Uniformly random legal moves.
    Random,
    /// The solver plays both sides.
    Solver,
}

/// Configuration for self-play series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Side driven by the solver.
    pub solver_side: Side,

    /// Opponent policy for the other side.
    pub opponent: OpponentKind,

    /// Does the player side move first?
    pub player_first: bool,

    /// Maximum moves per match (TIE play can cycle forever).
    pub max_moves: usize,

    /// Seed for the random opponent.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            solver_side: Side::Ai,
            opponent: OpponentKind::Random,
            player_first: true,
            max_moves: 500,
            seed: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the side driven by the solver.
    pub fn with_solver_side(mut self, side: Side) -> Self {
        self.solver_side = side;
        self
    }

    /// Set the opponent policy.
    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    /// Set who moves first.
    pub fn with_player_first(mut self, player_first: bool) -> Self {
        self.player_first = player_first;
        self
    }

    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
