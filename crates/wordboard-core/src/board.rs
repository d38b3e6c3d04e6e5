//! Square board model

use std::collections::HashMap;

use crate::cell::{Cell, CellId};

/// Default board edge length, in cells.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Square grid of cells, keyed by [`CellId`].
///
/// The model owns cell values; the view layer references cells by id only.
#[derive(Debug, Clone)]
pub struct BoardModel {
    size: usize,
    cells: HashMap<CellId, Cell>,
}

impl BoardModel {
    /// Build a `size` x `size` board of empty cells.
    pub fn new(size: usize) -> Self {
        let mut cells = HashMap::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                let cell = Cell::new(row, column);
                cells.insert(cell.id, cell);
            }
        }
        BoardModel { size, cells }
    }

    /// Board edge length, in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(&id)
    }

    /// Look up the cell at a board position. Absent means "no such cell",
    /// not an error.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(&CellId::of(row, column))
    }

    /// Signed bounds check, used by the word-entry cursor walk which may
    /// step past either edge.
    pub fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.size && (column as usize) < self.size
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        BoardModel::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_has_size_squared_cells() {
        let board = BoardModel::new(3);
        assert_eq!(board.size(), 3);
        assert!(board.cell_at(0, 0).is_some());
        assert!(board.cell_at(2, 2).is_some());
        assert!(board.cell_at(3, 0).is_none());
        assert!(board.cell_at(0, 3).is_none());
    }

    #[test]
    fn test_cell_lookup_by_id() {
        let board = BoardModel::new(4);
        let id = CellId::of(1, 2);
        let cell = board.cell(id).unwrap();
        assert_eq!(cell.row, 1);
        assert_eq!(cell.column, 2);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_cell_mut_writes_value() {
        let mut board = BoardModel::new(2);
        let id = CellId::of(0, 1);
        board.cell_mut(id).unwrap().value = Some('A');
        assert_eq!(board.cell(id).unwrap().value, Some('A'));
    }

    #[test]
    fn test_in_bounds() {
        let board = BoardModel::new(9);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(8, 8));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, -1));
        assert!(!board.in_bounds(9, 0));
        assert!(!board.in_bounds(0, 9));
    }

    #[test]
    fn test_default_board_size() {
        assert_eq!(BoardModel::default().size(), DEFAULT_BOARD_SIZE);
    }
}
