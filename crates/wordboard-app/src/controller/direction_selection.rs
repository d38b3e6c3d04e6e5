//! Direction selection: choose the axis the word will run along

use tracing::debug;
use wordboard_core::{BoardState, ComponentId, TileState};

use crate::view::BoardView;

use super::Controller;

/// A selection while arrows are showing. An arrow commits the direction
/// and enters word entry; any tile other than the focused one cancels.
pub(super) fn select(controller: &mut Controller, view: &mut BoardView, id: &ComponentId) {
    if controller.arrows.contains(id) {
        let Some(direction) = view.arrow(id).map(|arrow| arrow.direction()) else {
            return;
        };
        discard_arrows(controller, view);
        controller.direction = Some(direction);
        if let Some(focused) = controller.focused.clone() {
            if let Some(tile) = view.tile_mut(&focused) {
                tile.set_state(TileState::WaitingForInput);
            }
        }
        debug!(dx = direction.x, dy = direction.y, "direction chosen");
        controller.set_state(BoardState::WordEntry);
        return;
    }

    // re-selecting the focused tile changes nothing
    if controller.focused.as_ref() == Some(id) {
        return;
    }
    if view.tile(id).is_some() {
        cancel(controller, view);
    }
}

/// Abandon the selection: drop the arrows and make every tile selectable
/// again.
pub(super) fn cancel(controller: &mut Controller, view: &mut BoardView) {
    discard_arrows(controller, view);
    for tile in view.tiles_mut() {
        tile.set_state(TileState::Selectable);
        tile.set_highlightable(true);
    }
    controller.focused = None;
    controller.set_state(BoardState::SquareSelection);
}

fn discard_arrows(controller: &mut Controller, view: &mut BoardView) {
    for arrow in controller.arrows.drain(..) {
        view.remove_component(&arrow);
    }
}
