//! Board interaction state machine
//!
//! The controller owns the board model and all transient selection state:
//! the focused tile, the direction-arrow affordances, the chosen direction,
//! and the word-entry session. It is not a registered component; the host
//! routes actions and raw key events into it after dispatch.

mod direction_selection;
mod square_selection;
mod word_entry;


use std::collections::HashMap;

use tracing::debug;
use wordboard_core::{Action, BoardModel, BoardState, CellId, ComponentId, DirectionTranslation};

use crate::input_key::InputKey;
use crate::view::BoardView;

/// Per-word-entry bookkeeping, cleared on every transition out of
/// word entry.
#[derive(Debug, Default)]
pub(crate) struct WordEntrySession {
    /// Cells written during this session, keyed by cell id.
    pub(crate) processed: HashMap<CellId, ComponentId>,
    /// The tile the first letter of the session was typed into.
    pub(crate) first: Option<ComponentId>,
}

impl WordEntrySession {
    fn clear(&mut self) {
        self.processed.clear();
        self.first = None;
    }
}

/// The interaction FSM. Starts in square selection and cycles
/// indefinitely; there is no terminal state.
#[derive(Debug)]
pub struct Controller {
    board: BoardModel,
    state: BoardState,
    focused: Option<ComponentId>,
    arrows: Vec<ComponentId>,
    direction: Option<DirectionTranslation>,
    session: WordEntrySession,
}

impl Controller {
    pub fn new(board: BoardModel) -> Self {
        Controller {
            board,
            state: BoardState::default(),
            focused: None,
            arrows: Vec::new(),
            direction: None,
            session: WordEntrySession::default(),
        }
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn focused(&self) -> Option<&ComponentId> {
        self.focused.as_ref()
    }

    pub(crate) fn set_state(&mut self, state: BoardState) {
        if state != self.state {
            debug!(
                previous = self.state.label(),
                next = state.label(),
                "board state transition"
            );
        }
        self.state = state;
    }

    /// Route an action to the active state's handler. Unrecognized
    /// combinations are explicit no-ops.
    pub fn process_action(&mut self, action: Action, view: &mut BoardView) {
        match (self.state, action) {
            (BoardState::SquareSelection, Action::Select(id)) => {
                square_selection::select(self, view, &id);
            }
            (BoardState::DirectionSelection, Action::Select(id)) => {
                direction_selection::select(self, view, &id);
            }
            (BoardState::DirectionSelection, Action::Cancel) => {
                direction_selection::cancel(self, view);
            }
            (BoardState::WordEntry, Action::Select(id)) => {
                word_entry::select(self, view, &id);
            }
            (BoardState::WordEntry, Action::Submit) => {
                word_entry::submit(self, view);
            }
            (BoardState::WordEntry, Action::Cancel) => {
                word_entry::cancel(self, view);
            }
            _ => {}
        }
    }

    /// Route a raw key press to the active state. Only direction selection
    /// and word entry react to the keyboard.
    pub fn key_pressed(&mut self, key: InputKey, view: &mut BoardView) {
        match (self.state, key) {
            (BoardState::DirectionSelection, InputKey::Esc) => {
                direction_selection::cancel(self, view);
            }
            (BoardState::WordEntry, InputKey::Char(c)) if c.is_ascii_alphabetic() => {
                word_entry::letter(self, view, c.to_ascii_uppercase());
            }
            (BoardState::WordEntry, InputKey::Backspace) => {
                word_entry::backspace(self, view);
            }
            (BoardState::WordEntry, InputKey::Enter) => {
                word_entry::submit(self, view);
            }
            (BoardState::WordEntry, InputKey::Esc) => {
                word_entry::cancel(self, view);
            }
            _ => {}
        }
    }

    /// The cell the focused tile represents, if any.
    fn focused_cell(&self, view: &BoardView) -> Option<CellId> {
        let focused = self.focused.as_ref()?;
        view.tile(focused).map(|tile| tile.cell_id())
    }
}
