//! The match orchestrator.
//!
//! `Challenge` tracks the live status of one match between a player and
//! the solver-driven AI. It only reads from the shared classified graph.

use std::sync::Arc;

use tracing::debug;

use super::config::ChallengeConfig;
use super::status::Status;
use crate::core::{Outcome, Side};
use crate::error::{Error, Result};
use crate::games::pounter::{PounterMove, PounterPosition};
use crate::solver::{build_and_classify, ClassifiedGraph, RankedMove};

/// Solved graph for the counter-pair game.
pub type PounterSolver = ClassifiedGraph<PounterPosition>;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// This side drove its own pair to `(0, 0)`.
    Winner(Side),
    /// The current position is a proven draw.
    Deadlock,
}

/// A match between the player and the AI.
#[derive(Clone, Debug)]
pub struct Challenge {
    solver: Arc<PounterSolver>,
    config: ChallengeConfig,
    status: Status,
}

impl Challenge {
    /// Solve the game for `config`'s starting counters, then set up a match.
    pub fn solve(config: ChallengeConfig) -> Self {
        let solver = Arc::new(build_and_classify(config.start_positions()));
        Self::new(solver, config)
    }

    /// Set up a match against an already solved graph.
    pub fn new(solver: Arc<PounterSolver>, config: ChallengeConfig) -> Self {
        let status = config.start_status(config.player_first);
        Self {
            solver,
            config,
            status,
        }
    }

    /// The shared solved graph.
    #[must_use]
    pub fn solver(&self) -> &Arc<PounterSolver> {
        &self.solver
    }

    /// Start a new match from the configured counters.
    pub fn reset(&mut self, player_first: bool) {
        self.status = self.config.start_status(player_first);
    }

    /// Replace the live status wholesale.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Current status snapshot.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Current status as a solver position.
    #[must_use]
    pub fn current_position(&self) -> PounterPosition {
        self.status.to_position()
    }

    /// Outcome of the current position for the side to move.
    pub fn current_outcome(&self) -> Result<Outcome> {
        self.solver.position_type(&self.current_position())
    }

    /// The side whose pair is `(0, 0)`, if any.
    #[must_use]
    pub fn check_winner(&self) -> Option<Side> {
        Side::both().find(|&side| self.status.pair(side).is_zero())
    }

    /// Whether the current position is a proven draw.
    pub fn is_deadlock(&self) -> Result<bool> {
        self.solver.is_draw(&self.current_position())
    }

    /// How the match ended, or `None` while it continues.
    pub fn is_over(&self) -> Result<Option<GameEnd>> {
        if let Some(winner) = self.check_winner() {
            return Ok(Some(GameEnd::Winner(winner)));
        }
        if self.is_deadlock()? {
            return Ok(Some(GameEnd::Deadlock));
        }
        Ok(None)
    }

    /// Legal moves for the side to move, best first.
    pub fn sorted_next_positions(&self) -> Result<Vec<RankedMove<PounterPosition>>> {
        self.solver.ranked_moves(&self.current_position())
    }

    /// The solver's choice for the side to move.
    pub fn solver_move(&self) -> Result<Option<PounterMove>> {
        Ok(self.solver.best_move(&self.current_position())?.map(|m| m.mv))
    }

    /// Play `mv` for `side`.
    ///
    /// Returns `Ok(false)` for an illegal move (status unchanged) and an
    /// error if it is not `side`'s turn.
    pub fn play(&mut self, side: Side, mv: PounterMove) -> Result<bool> {
        if self.status.turn != side {
            return Err(Error::OutOfTurn {
                requested: side,
                current: self.status.turn,
            });
        }
        let applied = self.status.apply(mv);
        debug!(%side, %mv, applied, status = %self.status, "move");
        Ok(applied)
    }

    /// Play the player's move.
    pub fn make_player_move(&mut self, mv: PounterMove) -> Result<bool> {
        self.play(Side::Player, mv)
    }

    /// Let the AI pick and play its move.
    ///
    /// Returns the move played, or `None` if the AI has no legal move.
    pub fn make_ai_move(&mut self) -> Result<Option<PounterMove>> {
        if self.status.turn != Side::Ai {
            return Err(Error::OutOfTurn {
                requested: Side::Ai,
                current: self.status.turn,
            });
        }
        let Some(mv) = self.solver_move()? else {
            return Ok(None);
        };
        self.play(Side::Ai, mv)?;
        Ok(Some(mv))
    }
}
