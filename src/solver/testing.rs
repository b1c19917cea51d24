//! Table-driven game for exercising the solver on hand-built graphs.

use crate::rules::{GamePosition, Successors};

/// Node `n` of an adjacency table; row `n` lists the successors of `n`.
/// An empty row is a terminal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct TableGame {
    node: u8,
    table: &'static [&'static [u8]],
}

impl TableGame {
    pub(crate) fn new(table: &'static [&'static [u8]], node: u8) -> Self {
        Self { node, table }
    }

    pub(crate) fn node(&self) -> u8 {
        self.node
    }
}

impl GamePosition for TableGame {
    type Move = u8;

    fn successors(&self) -> Successors<Self> {
        self.table[self.node as usize]
            .iter()
            .enumerate()
            .map(|(i, &next)| (i as u8, TableGame::new(self.table, next)))
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.table[self.node as usize].is_empty()
    }
}
