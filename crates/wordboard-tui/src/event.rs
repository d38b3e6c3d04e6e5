//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use wordboard_app::InputKey;
use wordboard_core::prelude::*;

/// One input sample from the terminal, ready to feed an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermInput {
    Key(InputKey),
    Click { x: u16, y: u16 },
    PointerMove { x: u16, y: u16 },
    /// The pointer left the terminal (focus lost).
    PointerGone,
    Tick,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TermInput>> {
    // Poll with 50ms timeout (20 FPS)
    if !event::poll(Duration::from_millis(50))? {
        // Generate tick on timeout for animations
        return Ok(Some(TermInput::Tick));
    }

    match event::read()? {
        Event::Key(key) => {
            if key.kind != event::KeyEventKind::Press {
                return Ok(None);
            }
            Ok(key_event_to_input(key).map(TermInput::Key))
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Ok(Some(TermInput::Click {
                x: mouse.column,
                y: mouse.row,
            })),
            MouseEventKind::Moved => Ok(Some(TermInput::PointerMove {
                x: mouse.column,
                y: mouse.row,
            })),
            _ => Ok(None),
        },
        Event::FocusLost => Ok(Some(TermInput::PointerGone)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            None
        );
    }
}
