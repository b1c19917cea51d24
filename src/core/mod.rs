//! Game-agnostic building blocks: sides, outcome labels, RNG.

pub mod player;
pub mod outcome;
pub mod rng;

pub use player::Side;
pub use outcome::Outcome;
pub use rng::GameRng;
