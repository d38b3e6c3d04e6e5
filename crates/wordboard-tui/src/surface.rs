//! DrawSurface backed by the ratatui frame buffer

use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use wordboard_app::{Bounds, DrawSurface, Paint};

use crate::styles::style_for;

/// Adapts a ratatui [`Buffer`] to the engine's drawing contract. Writes
/// outside the buffer area are clipped, not errors.
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Self {
        BufferSurface { buffer }
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn fill(&mut self, bounds: Bounds, paint: Paint) {
        let style = style_for(paint);
        for y in bounds.y..bounds.y.saturating_add(bounds.height) {
            for x in bounds.x..bounds.x.saturating_add(bounds.width) {
                if let Some(cell) = self.buffer.cell_mut(Position::new(x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    fn put_text(&mut self, x: u16, y: u16, text: &str, paint: Paint) {
        if !self.buffer.area.contains(Position::new(x, y)) {
            return;
        }
        self.buffer.set_string(x, y, text, style_for(paint));
    }
}
