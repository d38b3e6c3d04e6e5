//! Interactive tile component for a single board cell

use wordboard_core::{Action, BoardModel, Cell, CellId, ComponentId, TileState};

use crate::component::{Bounds, DrawSurface, Paint, UiComponent};
use crate::events::Event;

/// The interactive visual representation of one [`Cell`].
///
/// The tile tracks its display state and hover highlight; the letter value
/// itself lives in the board model and is looked up at draw time.
#[derive(Debug, Clone)]
pub struct TileComponent {
    id: ComponentId,
    cell_id: CellId,
    bounds: Bounds,
    state: TileState,
    highlightable: bool,
    highlighted: bool,
}

impl TileComponent {
    pub fn new(cell: &Cell, bounds: Bounds) -> Self {
        TileComponent {
            id: ComponentId::new(format!("tile-{}-{}", cell.row, cell.column)),
            cell_id: cell.id,
            bounds,
            state: TileState::Selectable,
            highlightable: true,
            highlighted: false,
        }
    }

    pub fn cell_id(&self) -> CellId {
        self.cell_id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    pub fn is_highlightable(&self) -> bool {
        self.highlightable
    }

    pub fn set_highlightable(&mut self, highlightable: bool) {
        self.highlightable = highlightable;
        if !highlightable {
            self.highlighted = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn paint(&self) -> Paint {
        match self.state {
            TileState::Selectable if self.highlighted => Paint::TileHighlight,
            TileState::Selectable => Paint::TileIdle,
            TileState::Unfocused => Paint::TileUnfocused,
            TileState::WaitingForInput => Paint::TileWaiting,
            TileState::EnteredNotSubmitted => Paint::TileEntered,
            TileState::NotSelectable => Paint::TileFrozen,
        }
    }
}

impl UiComponent for TileComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn draw(&self, board: &BoardModel, surface: &mut dyn DrawSurface) {
        surface.fill(self.bounds, self.paint());

        if let Some(value) = board.cell(self.cell_id).and_then(|c| c.value) {
            let mut glyph = [0u8; 4];
            surface.put_text(
                self.bounds.center_x(),
                self.bounds.center_y(),
                value.encode_utf8(&mut glyph),
                Paint::Letter,
            );
        }
    }

    fn event_fired(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Click { .. } => Some(Action::Select(self.id.clone())),
            Event::MouseEnter { .. } => {
                if self.highlightable {
                    self.highlighted = true;
                }
                None
            }
            Event::MouseLeave { .. } => {
                self.highlighted = false;
                None
            }
            Event::KeyDown(_) => None,
        }
    }

    fn contains_point(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}
