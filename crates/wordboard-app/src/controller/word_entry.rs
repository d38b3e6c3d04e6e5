//! Word entry: typing letters along the chosen direction

use tracing::debug;
use wordboard_core::{BoardState, CellId, ComponentId, TileState};

use crate::component::UiComponent;
use crate::view::BoardView;

use super::Controller;

/// Write a letter into the focused cell and advance the cursor.
///
/// The advance steps along the chosen direction until it finds a cell that
/// is empty or was written earlier in this session. Stepping off the board
/// leaves the cursor on the just-typed cell, re-enterable.
pub(super) fn letter(controller: &mut Controller, view: &mut BoardView, letter: char) {
    let Some(focused) = controller.focused.clone() else {
        return;
    };
    let Some(cell_id) = controller.focused_cell(view) else {
        return;
    };
    let Some(direction) = controller.direction else {
        return;
    };

    if let Some(cell) = controller.board.cell_mut(cell_id) {
        cell.value = Some(letter);
    }
    if let Some(tile) = view.tile_mut(&focused) {
        tile.set_highlightable(true);
        tile.set_state(TileState::EnteredNotSubmitted);
    }
    if controller.session.first.is_none() {
        controller.session.first = Some(focused.clone());
    }
    controller.session.processed.insert(cell_id, focused.clone());

    let Some((mut row, mut column)) = position(controller, cell_id) else {
        return;
    };
    loop {
        row += direction.y;
        column += direction.x;
        if !controller.board.in_bounds(row, column) {
            // edge reached: the cursor stays on the just-typed cell
            if let Some(tile) = view.tile_mut(&focused) {
                tile.set_state(TileState::WaitingForInput);
            }
            return;
        }
        let next = CellId::of(row as usize, column as usize);
        let viable = controller
            .board
            .cell(next)
            .map_or(false, |cell| cell.is_empty())
            || controller.session.processed.contains_key(&next);
        if viable {
            focus_tile_for_cell(controller, view, next);
            return;
        }
    }
}

/// Delete backwards from the cursor.
///
/// A focused cell that holds a letter loses it and the cursor steps back.
/// A focused cell with no letter (the cursor parked past the last typed
/// letter) deletes the previous written cell's letter instead, landing the
/// cursor on it. The first-typed cell is the floor: once the cursor is
/// there and empty, backspace does nothing.
pub(super) fn backspace(controller: &mut Controller, view: &mut BoardView) {
    let Some(focused) = controller.focused.clone() else {
        return;
    };
    let Some(cell_id) = controller.focused_cell(view) else {
        return;
    };

    let focused_was_empty = controller
        .board
        .cell(cell_id)
        .map_or(true, |cell| cell.is_empty());
    if !focused_was_empty {
        if let Some(cell) = controller.board.cell_mut(cell_id) {
            cell.value = None;
        }
    }

    // nothing before the first-typed cell to undo
    if controller.session.first.as_ref() == Some(&focused) {
        return;
    }
    let Some(direction) = controller.direction else {
        return;
    };
    let back = direction.negated();
    let Some((mut row, mut column)) = position(controller, cell_id) else {
        return;
    };
    loop {
        row += back.y;
        column += back.x;
        if !controller.board.in_bounds(row, column) {
            return;
        }
        let previous = CellId::of(row as usize, column as usize);
        if controller.session.processed.contains_key(&previous) {
            if focused_was_empty {
                // the cursor never wrote its own cell, so the letter being
                // deleted is the previous one
                if let Some(cell) = controller.board.cell_mut(previous) {
                    cell.value = None;
                }
            }
            if let Some(tile) = view.tile_mut(&focused) {
                tile.set_state(TileState::Unfocused);
            }
            focus_tile_for_cell(controller, view, previous);
            return;
        }
    }
}

/// Commit the word: the focused tile freezes, everything else resets.
pub(super) fn submit(controller: &mut Controller, view: &mut BoardView) {
    let focused = controller.focused.clone();
    for tile in view.tiles_mut() {
        if Some(tile.id()) == focused.as_ref() {
            tile.set_state(TileState::NotSelectable);
            tile.set_highlightable(false);
        } else {
            tile.set_state(TileState::Selectable);
            tile.set_highlightable(true);
        }
    }
    debug!(cells = controller.session.processed.len(), "word submitted");
    end_session(controller);
}

/// Abandon the word: every cell written this session is cleared.
pub(super) fn cancel(controller: &mut Controller, view: &mut BoardView) {
    let written: Vec<CellId> = controller.session.processed.keys().copied().collect();
    for cell_id in written {
        if let Some(cell) = controller.board.cell_mut(cell_id) {
            cell.value = None;
        }
    }
    for tile in view.tiles_mut() {
        tile.set_state(TileState::Selectable);
        tile.set_highlightable(true);
    }
    debug!(cells = controller.session.processed.len(), "word entry cancelled");
    end_session(controller);
}

/// A tile selection during word entry: refocusing a cell written this
/// session moves the cursor there; any other tile cancels the session.
pub(super) fn select(controller: &mut Controller, view: &mut BoardView, id: &ComponentId) {
    if controller.focused.as_ref() == Some(id) {
        return;
    }
    let Some(cell_id) = view.tile(id).map(|tile| tile.cell_id()) else {
        return;
    };
    if !controller.session.processed.contains_key(&cell_id) {
        cancel(controller, view);
        return;
    }

    // park the current tile according to whether it holds a letter
    if let Some(focused) = controller.focused.clone() {
        if let Some(previous_cell) = controller.focused_cell(view) {
            let parked = if controller
                .board
                .cell(previous_cell)
                .map_or(false, |cell| !cell.is_empty())
            {
                TileState::EnteredNotSubmitted
            } else {
                TileState::Unfocused
            };
            if let Some(tile) = view.tile_mut(&focused) {
                tile.set_state(parked);
            }
        }
    }
    focus_tile_for_cell(controller, view, cell_id);
}

fn end_session(controller: &mut Controller) {
    controller.session.clear();
    controller.focused = None;
    controller.direction = None;
    controller.set_state(BoardState::SquareSelection);
}

fn focus_tile_for_cell(controller: &mut Controller, view: &mut BoardView, cell_id: CellId) {
    if let Some(tile_id) = view.tile_id_for_cell(cell_id) {
        if let Some(tile) = view.tile_mut(&tile_id) {
            tile.set_state(TileState::WaitingForInput);
        }
        controller.focused = Some(tile_id);
    }
}

fn position(controller: &Controller, cell_id: CellId) -> Option<(i32, i32)> {
    controller
        .board
        .cell(cell_id)
        .map(|cell| (cell.row as i32, cell.column as i32))
}
