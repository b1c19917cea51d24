//! Positions and move rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::counter::{CounterPair, Slot};
use crate::rules::{GamePosition, Successors};

/// A move: which of the mover's counters grows, and which of the
/// opponent's counters it grows by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PounterMove {
    /// Mover's counter that receives the addition.
    pub target: Slot,
    /// Non-mover's counter whose value is added.
    pub source: Slot,
}

impl PounterMove {
    /// All four selector combinations, in console order.
    pub const ALL: [PounterMove; 4] = [
        PounterMove::new(Slot::Smaller, Slot::Smaller),
        PounterMove::new(Slot::Smaller, Slot::Larger),
        PounterMove::new(Slot::Larger, Slot::Smaller),
        PounterMove::new(Slot::Larger, Slot::Larger),
    ];

    /// Create a move from its two selectors.
    #[must_use]
    pub const fn new(target: Slot, source: Slot) -> Self {
        Self { target, source }
    }

    /// Create a move from console selectors (`0` = smaller, `1` = larger).
    #[must_use]
    pub const fn from_indices(target: u8, source: u8) -> Option<Self> {
        match (Slot::from_index(target), Slot::from_index(source)) {
            (Some(target), Some(source)) => Some(Self::new(target, source)),
            _ => None,
        }
    }
}

impl std::fmt::Display for PounterMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.target.index(), self.source.index())
    }
}

/// A game position: the pair of the side about to move, and the pair of
/// the side that just moved.
///
/// The derived ordering compares mover pairs first, then non-mover pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PounterPosition {
    mover: CounterPair,
    non_mover: CounterPair,
}

impl PounterPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(mover: CounterPair, non_mover: CounterPair) -> Self {
        Self { mover, non_mover }
    }

    /// The standard opening: both sides hold `(1, 1)`.
    #[must_use]
    pub fn start() -> Self {
        Self::new(CounterPair::new(1, 1), CounterPair::new(1, 1))
    }

    /// Start positions for graph construction.
    #[must_use]
    pub fn starting_positions() -> Vec<Self> {
        vec![Self::start()]
    }

    /// Pair of the side about to move.
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> CounterPair {
        self.mover
    }

    /// Pair of the side that just moved.
    #[inline]
    #[must_use]
    pub const fn non_mover(&self) -> CounterPair {
        self.non_mover
    }

    /// Play `mv`, returning the successor with roles swapped.
    ///
    /// Returns `None` if either selected counter is zero.
    #[must_use]
    pub fn play(&self, mv: PounterMove) -> Option<Self> {
        let target = self.mover.get(mv.target);
        let source = self.non_mover.get(mv.source);
        if target == 0 || source == 0 {
            return None;
        }
        Some(Self::new(self.non_mover, self.mover.bumped(mv.target, source)))
    }
}

impl GamePosition for PounterPosition {
    type Move = PounterMove;

    /// Legal successors, one per distinct resulting position.
    ///
    /// Combinations that land on an already listed position (equal
    /// counters make smaller/larger interchangeable) are skipped.
    fn successors(&self) -> Successors<Self> {
        let mut out: SmallVec<[(PounterMove, PounterPosition); 4]> = SmallVec::new();
        for mv in PounterMove::ALL {
            if let Some(next) = self.play(mv) {
                if out.iter().all(|(_, seen)| *seen != next) {
                    out.push((mv, next));
                }
            }
        }
        out
    }

    /// The side that just moved drove its own pair to `(0, 0)`.
    fn is_terminal(&self) -> bool {
        self.non_mover.is_zero()
    }

    fn apply(&self, mv: PounterMove) -> Option<Self> {
        self.play(mv)
    }
}

impl std::fmt::Display for PounterPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mover: {}, Non-mover: {}", self.mover, self.non_mover)
    }
}
