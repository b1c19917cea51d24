//! Position abstraction for solvable games.
//!
//! Games implement `GamePosition` to define:
//! - Legal successors of a position
//! - Terminality
//! - A canonical total order used for deduplication
//!
//! The graph builder and classifier call into `GamePosition` but never
//! interpret game-specific concepts directly.

pub mod engine;

pub use engine::{GamePosition, Successors};
