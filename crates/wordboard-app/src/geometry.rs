//! Board geometry: cell placement and pointer-to-cell lookup
//!
//! All coordinates are terminal cells. The board is drawn as a grid with
//! one-cell-wide divider lines between tiles, so the pitch of a column is
//! `tile_width + 1` and of a row `tile_height + 1`.

use wordboard_core::{Error, Result};

use crate::component::Bounds;

/// Placement of the board on the drawing surface.
#[derive(Debug, Clone, Copy)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    tile_width: u16,
    tile_height: u16,
    board_size: usize,
}

impl BoardGeometry {
    pub fn new(
        origin_x: u16,
        origin_y: u16,
        tile_width: u16,
        tile_height: u16,
        board_size: usize,
    ) -> Self {
        BoardGeometry {
            origin_x,
            origin_y,
            tile_width,
            tile_height,
            board_size,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Horizontal distance between the left edges of adjacent tiles.
    pub fn pitch_x(&self) -> u16 {
        self.tile_width + 1
    }

    /// Vertical distance between the top edges of adjacent tiles.
    pub fn pitch_y(&self) -> u16 {
        self.tile_height + 1
    }

    /// The rectangle spanned by the grid lines (outer edges inclusive).
    pub fn board_bounds(&self) -> Bounds {
        Bounds::new(
            self.origin_x,
            self.origin_y,
            self.board_size as u16 * self.pitch_x(),
            self.board_size as u16 * self.pitch_y(),
        )
    }

    /// The drawable interior of the tile at a board position.
    ///
    /// Requesting a position outside the board is an invalid argument and
    /// fails hard, unlike pointer lookups which simply miss.
    pub fn tile_bounds(&self, row: usize, column: usize) -> Result<Bounds> {
        if row >= self.board_size || column >= self.board_size {
            return Err(Error::out_of_bounds(row, column, self.board_size));
        }
        Ok(Bounds::new(
            self.origin_x + 1 + column as u16 * self.pitch_x(),
            self.origin_y + 1 + row as u16 * self.pitch_y(),
            self.tile_width,
            self.tile_height,
        ))
    }

    /// Bounds for a direction arrow attached to the tile at `(row, column)`:
    /// the neighbor cell to the right for a horizontal arrow, below for a
    /// vertical one. Fails like [`tile_bounds`](Self::tile_bounds) when the
    /// neighbor is off the board.
    pub fn arrow_bounds(&self, row: usize, column: usize, horizontal: bool) -> Result<Bounds> {
        if horizontal {
            self.tile_bounds(row, column + 1)
        } else {
            self.tile_bounds(row + 1, column)
        }
    }

    /// Map a pointer position to the board cell under it. Positions on a
    /// divider line or off the board return `None` ("no tile", not an
    /// error).
    pub fn cell_at_point(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if x <= self.origin_x || y <= self.origin_y {
            return None;
        }
        let rel_x = x - self.origin_x - 1;
        let rel_y = y - self.origin_y - 1;
        let column = (rel_x / self.pitch_x()) as usize;
        let row = (rel_y / self.pitch_y()) as usize;
        if row >= self.board_size || column >= self.board_size {
            return None;
        }
        // on a divider line
        if rel_x % self.pitch_x() >= self.tile_width || rel_y % self.pitch_y() >= self.tile_height {
            return None;
        }
        Some((row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(0, 0, 4, 2, 3)
    }

    #[test]
    fn test_tile_bounds_layout() {
        let g = geometry();
        assert_eq!(g.tile_bounds(0, 0).unwrap(), Bounds::new(1, 1, 4, 2));
        assert_eq!(g.tile_bounds(0, 1).unwrap(), Bounds::new(6, 1, 4, 2));
        assert_eq!(g.tile_bounds(1, 0).unwrap(), Bounds::new(1, 4, 4, 2));
        assert_eq!(g.tile_bounds(2, 2).unwrap(), Bounds::new(11, 7, 4, 2));
    }

    #[test]
    fn test_tile_bounds_out_of_range_is_hard_error() {
        let g = geometry();
        assert!(matches!(
            g.tile_bounds(3, 0),
            Err(Error::OutOfBounds {
                row: 3,
                column: 0,
                board_size: 3
            })
        ));
        assert!(g.tile_bounds(0, 3).is_err());
    }

    #[test]
    fn test_arrow_bounds_are_neighbor_cells() {
        let g = geometry();
        assert_eq!(
            g.arrow_bounds(0, 0, true).unwrap(),
            g.tile_bounds(0, 1).unwrap()
        );
        assert_eq!(
            g.arrow_bounds(0, 0, false).unwrap(),
            g.tile_bounds(1, 0).unwrap()
        );
        // edge tiles have no neighbor in that direction
        assert!(g.arrow_bounds(0, 2, true).is_err());
        assert!(g.arrow_bounds(2, 0, false).is_err());
    }

    #[test]
    fn test_cell_at_point_hits_and_misses() {
        let g = geometry();
        assert_eq!(g.cell_at_point(1, 1), Some((0, 0)));
        assert_eq!(g.cell_at_point(4, 2), Some((0, 0)));
        assert_eq!(g.cell_at_point(6, 1), Some((0, 1)));
        assert_eq!(g.cell_at_point(1, 4), Some((1, 0)));
        // grid lines are not cells
        assert_eq!(g.cell_at_point(0, 1), None);
        assert_eq!(g.cell_at_point(5, 1), None);
        assert_eq!(g.cell_at_point(1, 3), None);
        // off the board entirely
        assert_eq!(g.cell_at_point(40, 1), None);
        assert_eq!(g.cell_at_point(1, 40), None);
    }

    #[test]
    fn test_board_bounds() {
        let g = geometry();
        assert_eq!(g.board_bounds(), Bounds::new(0, 0, 15, 9));
    }
}
