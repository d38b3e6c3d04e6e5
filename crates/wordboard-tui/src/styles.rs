//! Paint-to-style mapping
//!
//! The engine names paints semantically; this module is the only place a
//! terminal color appears.

use ratatui::style::{Color, Modifier, Style};
use wordboard_app::Paint;

// --- Tile backgrounds ---
const TILE_BG: Color = Color::Black;
const TILE_HIGHLIGHT_BG: Color = Color::DarkGray;
const TILE_UNFOCUSED_BG: Color = Color::Black;
const TILE_WAITING_BG: Color = Color::Blue;
const TILE_ENTERED_BG: Color = Color::Cyan;
const TILE_FROZEN_BG: Color = Color::Green;

// --- Foreground ---
const LETTER_FG: Color = Color::White;
const ARROW_FG: Color = Color::Yellow;
const FRAME_FG: Color = Color::DarkGray;
const UNFOCUSED_FG: Color = Color::DarkGray;

/// Concrete style for a semantic paint.
pub fn style_for(paint: Paint) -> Style {
    match paint {
        Paint::TileIdle => Style::default().bg(TILE_BG),
        Paint::TileHighlight => Style::default().bg(TILE_HIGHLIGHT_BG),
        Paint::TileUnfocused => Style::default().bg(TILE_UNFOCUSED_BG).fg(UNFOCUSED_FG),
        Paint::TileWaiting => Style::default().bg(TILE_WAITING_BG),
        Paint::TileEntered => Style::default().bg(TILE_ENTERED_BG).fg(Color::Black),
        Paint::TileFrozen => Style::default().bg(TILE_FROZEN_BG).fg(Color::Black),
        Paint::Letter => Style::default()
            .fg(LETTER_FG)
            .add_modifier(Modifier::BOLD),
        Paint::Arrow => Style::default()
            .fg(ARROW_FG)
            .add_modifier(Modifier::BOLD),
        Paint::ArrowPulse => Style::default()
            .fg(ARROW_FG)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        Paint::Frame => Style::default().fg(FRAME_FG),
    }
}
