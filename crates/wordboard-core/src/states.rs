//! Controller and tile state enums

use serde::{Deserialize, Serialize};

/// Coarse-grained mode of the board controller.
///
/// The machine starts in `SquareSelection` and cycles indefinitely; there is
/// no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardState {
    /// Waiting for the player to pick a tile
    #[default]
    SquareSelection,

    /// A tile is focused; waiting for the player to pick a direction arrow
    DirectionSelection,

    /// Letters are being typed along the chosen direction
    WordEntry,
}

impl BoardState {
    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            BoardState::SquareSelection => "Select a square",
            BoardState::DirectionSelection => "Pick a direction",
            BoardState::WordEntry => "Type your word",
        }
    }
}

/// Per-tile visual/interactive sub-state, driven by the controller but
/// independent of [`BoardState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileState {
    /// Normal tile, clickable and hover-highlightable
    #[default]
    Selectable,

    /// Dimmed while another tile holds focus
    Unfocused,

    /// The word-entry cursor is on this tile
    WaitingForInput,

    /// Holds a letter typed this session, not yet submitted
    EnteredNotSubmitted,

    /// Letter was submitted; the tile is frozen (still clickable in later
    /// rounds, visually distinct)
    NotSelectable,
}
