//! Board cell identity and value

use serde::{Deserialize, Serialize};

/// Opaque identifier for a cell position.
///
/// The id is a pure function of the cell's `(row, column)` position and is
/// NOT affected by the board the cell is placed on: any two cells with the
/// same coordinates are guaranteed to have the same id, regardless of their
/// value or board. The representation is an implementation detail and may
/// change at any time -- callers must rely only on equality and map lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(u32);

impl CellId {
    /// Generate the id for a cell at the given board position.
    pub fn of(row: usize, column: usize) -> Self {
        CellId(((row as u32) << 16) | (column as u32 & 0xFFFF))
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0 >> 16, self.0 & 0xFFFF)
    }
}

/// A single square on a game board: its position and the letter it carries.
///
/// An empty cell has `value == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub id: CellId,
    pub value: Option<char>,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Cell {
            row,
            column,
            id: CellId::of(row, column),
            value: None,
        }
    }

    /// True when no letter has been entered into this cell.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
