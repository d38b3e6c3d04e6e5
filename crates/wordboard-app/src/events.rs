//! Typed events routed through the event registry

use std::collections::HashSet;

use wordboard_core::ComponentId;

use crate::input_key::InputKey;

/// Names the event registry keys dispatchers and subscriptions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Click,
    MouseEnter,
    MouseLeave,
    KeyDown,
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EventName::Click => "click",
            EventName::MouseEnter => "mouse-enter",
            EventName::MouseLeave => "mouse-leave",
            EventName::KeyDown => "key-down",
        };
        f.write_str(label)
    }
}

/// A typed event instance, carrying its payload.
///
/// `Click` carries the pointer position in surface coordinates. Enter/leave
/// events carry the emitter-computed set of components that were entered or
/// left in this pointer sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Click {
        x: u16,
        y: u16,
    },
    MouseEnter {
        components: HashSet<ComponentId>,
    },
    MouseLeave {
        components: HashSet<ComponentId>,
    },
    KeyDown(InputKey),
}

impl Event {
    pub fn name(&self) -> EventName {
        match self {
            Event::Click { .. } => EventName::Click,
            Event::MouseEnter { .. } => EventName::MouseEnter,
            Event::MouseLeave { .. } => EventName::MouseLeave,
            Event::KeyDown(_) => EventName::KeyDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::Click { x: 0, y: 0 }.name(), EventName::Click);
        assert_eq!(
            Event::MouseEnter {
                components: HashSet::new()
            }
            .name(),
            EventName::MouseEnter
        );
        assert_eq!(
            Event::MouseLeave {
                components: HashSet::new()
            }
            .name(),
            EventName::MouseLeave
        );
        assert_eq!(
            Event::KeyDown(InputKey::Char('a')).name(),
            EventName::KeyDown
        );
    }
}
