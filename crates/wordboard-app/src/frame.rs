//! Static board frame: outline and grid lines

use wordboard_core::{BoardModel, ComponentId};

use crate::component::{DrawSurface, Paint, UiComponent};
use crate::geometry::BoardGeometry;

/// Draws the board outline and the square dividers. Subscribes to nothing
/// and never collides with the pointer.
#[derive(Debug, Clone)]
pub struct BoardFrameComponent {
    id: ComponentId,
    geometry: BoardGeometry,
}

impl BoardFrameComponent {
    pub fn new(geometry: BoardGeometry) -> Self {
        BoardFrameComponent {
            id: ComponentId::new("board-frame"),
            geometry,
        }
    }
}

impl UiComponent for BoardFrameComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn draw(&self, _board: &BoardModel, surface: &mut dyn DrawSurface) {
        let outer = self.geometry.board_bounds();
        let size = self.geometry.board_size();
        let pitch_x = self.geometry.pitch_x();
        let pitch_y = self.geometry.pitch_y();

        // horizontal lines, including the outer top/bottom edges
        for line in 0..=size {
            let y = outer.y + line as u16 * pitch_y;
            let row: String = "─".repeat(outer.width as usize);
            surface.put_text(outer.x, y, &row, Paint::Frame);
        }

        // vertical lines overwrite the horizontal runs at crossings
        for line in 0..=size {
            let x = outer.x + line as u16 * pitch_x;
            for y in outer.y..outer.y + outer.height + 1 {
                let glyph = if y == outer.y || y == outer.y + outer.height {
                    "┼"
                } else {
                    "│"
                };
                surface.put_text(x, y, glyph, Paint::Frame);
            }
        }
    }

    fn contains_point(&self, _x: u16, _y: u16) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_never_collides() {
        let frame = BoardFrameComponent::new(BoardGeometry::new(0, 0, 4, 2, 3));
        assert!(!frame.contains_point(0, 0));
        assert!(!frame.contains_point(5, 5));
    }

    #[test]
    fn test_frame_id() {
        let frame = BoardFrameComponent::new(BoardGeometry::new(0, 0, 4, 2, 3));
        assert_eq!(frame.id().as_str(), "board-frame");
    }
}
