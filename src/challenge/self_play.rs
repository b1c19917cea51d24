//! Self-play matches for exercising the orchestrator end to end.
//!
//! The solver drives one side; the other side is either a uniformly random
//! mover or the solver again.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::{ChallengeConfig, OpponentKind, SelfPlayConfig};
use super::game::{Challenge, GameEnd, PounterSolver};
use super::status::Status;
use crate::core::{GameRng, Outcome, Side};
use crate::error::Result;
use crate::games::pounter::PounterMove;
use crate::rules::GamePosition;

/// How a self-play match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// This side drove its own pair to `(0, 0)`.
    Winner(Side),
    /// A proven draw was reached.
    Deadlock,
    /// The move cap was hit first.
    MoveLimit,
    /// This side was to move with no legal move.
    Stuck(Side),
}

impl From<GameEnd> for MatchResult {
    fn from(end: GameEnd) -> Self {
        match end {
            GameEnd::Winner(side) => MatchResult::Winner(side),
            GameEnd::Deadlock => MatchResult::Deadlock,
        }
    }
}

/// A single move in a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchStep {
    /// Side that moved.
    pub side: Side,

    /// Move played.
    pub mv: PounterMove,

    /// Classification of the position before the move, for `side`.
    pub outcome_before: Outcome,
}

/// Full record of a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed of the random opponent for this match.
    pub seed: u64,

    /// Moves in order.
    pub steps: Vec<MatchStep>,

    /// How the match ended.
    pub result: MatchResult,

    /// Most visits to a single status (1 = no repetition).
    pub max_repetitions: u32,
}

impl MatchRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Tally over a series of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Matches played.
    pub matches: usize,
    /// Matches won by the player side.
    pub player_wins: usize,
    /// Matches won by the AI side.
    pub ai_wins: usize,
    /// Matches ending in a proven draw.
    pub deadlocks: usize,
    /// Matches cut off by the move cap.
    pub move_limits: usize,
}

impl SeriesSummary {
    /// Tally `records`.
    #[must_use]
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut summary = Self {
            matches: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.result {
                MatchResult::Winner(Side::Player) => summary.player_wins += 1,
                MatchResult::Winner(Side::Ai) => summary.ai_wins += 1,
                MatchResult::Deadlock => summary.deadlocks += 1,
                MatchResult::MoveLimit | MatchResult::Stuck(_) => summary.move_limits += 1,
            }
        }
        summary
    }
}

/// Runs self-play matches against a shared solved graph.
pub struct SelfPlay {
    solver: Arc<PounterSolver>,
    challenge_config: ChallengeConfig,
    config: SelfPlayConfig,
    rng: GameRng,
}

impl SelfPlay {
    /// Create a runner for the standard opening.
    pub fn new(solver: Arc<PounterSolver>, config: SelfPlayConfig) -> Self {
        Self::with_challenge(solver, ChallengeConfig::default(), config)
    }

    /// Create a runner with custom starting counters.
    pub fn with_challenge(
        solver: Arc<PounterSolver>,
        challenge_config: ChallengeConfig,
        config: SelfPlayConfig,
    ) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            solver,
            challenge_config: challenge_config.with_player_first(config.player_first),
            config,
            rng,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one match to completion or the move cap.
    pub fn play_match(&mut self) -> Result<MatchRecord> {
        let mut rng = self.rng.fork();
        let seed = rng.seed();
        let mut challenge = Challenge::new(Arc::clone(&self.solver), self.challenge_config.clone());
        let mut steps = Vec::new();
        let mut visits: FxHashMap<Status, u32> = FxHashMap::default();

        let result = loop {
            *visits.entry(*challenge.status()).or_insert(0) += 1;

            if let Some(end) = challenge.is_over()? {
                break MatchResult::from(end);
            }
            if steps.len() >= self.config.max_moves {
                break MatchResult::MoveLimit;
            }

            let side = challenge.status().turn;
            let outcome_before = challenge.current_outcome()?;
            let Some(mv) = self.choose_move(&challenge, side, &mut rng)? else {
                break MatchResult::Stuck(side);
            };
            challenge.play(side, mv)?;
            steps.push(MatchStep {
                side,
                mv,
                outcome_before,
            });
        };

        let record = MatchRecord {
            seed,
            steps,
            result,
            max_repetitions: visits.values().copied().max().unwrap_or(0),
        };
        info!(
            seed,
            moves = record.len(),
            result = ?record.result,
            max_repetitions = record.max_repetitions,
            "match finished"
        );
        Ok(record)
    }

    /// Play `count` matches, each with its own forked RNG stream.
    pub fn play_matches(&mut self, count: usize) -> Result<Vec<MatchRecord>> {
        (0..count).map(|_| self.play_match()).collect()
    }

    fn choose_move(
        &self,
        challenge: &Challenge,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<Option<PounterMove>> {
        if side == self.config.solver_side || self.config.opponent == OpponentKind::Solver {
            return challenge.solver_move();
        }
        let moves: Vec<PounterMove> = challenge
            .current_position()
            .successors()
            .into_iter()
            .map(|(mv, _)| mv)
            .collect();
        Ok(rng.choose(&moves).copied())
    }
}
