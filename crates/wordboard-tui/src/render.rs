//! Frame rendering: header, board components, status hints

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use wordboard_app::{BoardView, Controller, UiComponent};
use wordboard_core::BoardState;

use crate::surface::BufferSurface;

/// Render one frame: title, the board's components in z-order, then the
/// state-dependent key hints.
pub fn draw(frame: &mut Frame, controller: &Controller, view: &BoardView) {
    let area = frame.area();

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "wordboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ctrl-q quits", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(title, Rect::new(0, 0, area.width, 1));

    let board = controller.board();
    let buffer = frame.buffer_mut();
    let mut surface = BufferSurface::new(buffer);
    for id in view.store().draw_order() {
        if let Some(component) = view.store().get(&id) {
            if component.is_visible() {
                component.draw(board, &mut surface);
            }
        }
    }

    let hint_y = view.geometry().board_bounds().y + view.geometry().board_bounds().height + 2;
    if hint_y < area.height {
        let hints = Paragraph::new(Span::styled(
            status_hint(controller.state()),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(hints, Rect::new(0, hint_y, area.width, 1));
    }
}

fn status_hint(state: BoardState) -> &'static str {
    match state {
        BoardState::SquareSelection => "click a tile to start a word",
        BoardState::DirectionSelection => "click an arrow to choose a direction · esc cancels",
        BoardState::WordEntry => "type letters · backspace deletes · enter submits · esc cancels",
    }
}
