//! The counter-pair game.
//!
//! Each side holds an unordered pair of counters in `0..=9`:
//! - On your turn: pick one of your nonzero counters (the target) and one
//!   of the opponent's nonzero counters (the source)
//! - The target becomes `(target + source) mod 10`
//! - Driving your own pair to exactly `(0, 0)` wins
//!
//! Both sides start at `(1, 1)`.

mod counter;
mod position;

pub use counter::{CounterPair, Slot, COUNTER_MODULUS};
pub use position::{PounterMove, PounterPosition};
