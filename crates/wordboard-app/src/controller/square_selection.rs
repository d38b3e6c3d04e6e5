//! Square selection: pick the tile a word will start from

use tracing::{debug, warn};
use wordboard_core::{BoardState, ComponentId, TileState};

use crate::arrow::ArrowComponent;
use crate::component::UiComponent;
use crate::view::BoardView;

use super::Controller;

/// A tile was selected: focus it, unfocus everything else, and offer the
/// open directions (right and/or down) as clickable arrows.
pub(super) fn select(controller: &mut Controller, view: &mut BoardView, id: &ComponentId) {
    let Some(cell_id) = view.tile(id).map(|tile| tile.cell_id()) else {
        // not a tile id; nothing to select in this state
        return;
    };
    let Some((row, column)) = controller
        .board
        .cell(cell_id)
        .map(|cell| (cell.row, cell.column))
    else {
        return;
    };

    for tile in view.tiles_mut() {
        if tile.id() == id {
            tile.set_highlightable(false);
        } else {
            tile.set_state(TileState::Unfocused);
        }
    }

    controller.arrows.clear();
    let size = controller.board.size();
    let geometry = view.geometry();
    // one arrow per open adjacent direction: right, then down
    for (open, horizontal, rotation) in [
        (column + 1 < size, true, 0.0),
        (row + 1 < size, false, 270.0),
    ] {
        if !open {
            continue;
        }
        match geometry.arrow_bounds(row, column, horizontal) {
            Ok(bounds) => {
                let arrow_id = view.add_arrow(ArrowComponent::new(bounds, rotation));
                controller.arrows.push(arrow_id);
            }
            Err(err) => {
                // board model and geometry disagree about the board size
                warn!(row, column, error = %err, "cannot place direction arrow");
            }
        }
    }

    debug!(tile = %id, arrows = controller.arrows.len(), "tile focused");
    controller.focused = Some(id.clone());
    controller.set_state(BoardState::DirectionSelection);
}
