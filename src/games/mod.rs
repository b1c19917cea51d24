//! Concrete games.

pub mod pounter;
