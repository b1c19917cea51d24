//! The `GamePosition` trait.

use std::fmt::Debug;

use smallvec::SmallVec;

/// Successor list returned by [`GamePosition::successors`].
///
/// SmallVec keeps the typical branching factor (at most 4) off the heap.
pub type Successors<P> = SmallVec<[(<P as GamePosition>::Move, P); 4]>;

/// A position of a two-player, perfect-information game.
///
/// Positions are immutable values. Every move produces a new position in
/// which the roles are swapped: the side that just acted becomes the
/// non-mover.
///
/// ## Implementation Notes
///
/// - `successors`: Pure function of `self`; omit illegal moves entirely
/// - `is_terminal`: True when the game is already decided; the mover of a
///   terminal position has lost
/// - `Ord`: Canonical identity. Two positions comparing `Equal` are the
///   same node of the position graph. The order carries no gameplay
///   meaning.
pub trait GamePosition: Clone + Ord + Debug {
    /// Move descriptor attached to graph edges.
    type Move: Copy + Eq + Debug;

    /// Enumerate legal `(move, resulting position)` pairs.
    ///
    /// Returns empty if the mover has no legal move.
    fn successors(&self) -> Successors<Self>;

    /// Check if the game is over at this position.
    fn is_terminal(&self) -> bool;

    // === Convenience Methods ===

    /// The position reached by `mv`, if `mv` is legal here.
    fn apply(&self, mv: Self::Move) -> Option<Self> {
        self.successors()
            .into_iter()
            .find(|(candidate, _)| *candidate == mv)
            .map(|(_, next)| next)
    }
}
