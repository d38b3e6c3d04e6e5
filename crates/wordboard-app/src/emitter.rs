//! Event emitters: translate raw input samples into registry events

use std::collections::{HashMap, HashSet};

use wordboard_core::ComponentId;

use crate::component::UiComponent;
use crate::events::{Event, EventName};
use crate::input_key::InputKey;
use crate::registry::EventPipe;
use crate::store::ComponentStore;

/// An input source the registry can hand pipes to.
///
/// An emitter holding no pipe for an event name silently produces nothing
/// for that name.
pub trait Emitter {
    fn set_pipe(&mut self, pipe: EventPipe);
}

/// Emits a `Click` event per pointer press.
#[derive(Debug, Default)]
pub struct ClickEmitter {
    pipe: Option<EventPipe>,
}

impl ClickEmitter {
    pub fn new() -> Self {
        ClickEmitter::default()
    }

    pub fn pointer_clicked(&self, x: u16, y: u16) {
        if let Some(pipe) = &self.pipe {
            pipe.emit(Event::Click { x, y });
        }
    }
}

impl Emitter for ClickEmitter {
    fn set_pipe(&mut self, pipe: EventPipe) {
        self.pipe = Some(pipe);
    }
}

/// Emits a `KeyDown` event per key press.
#[derive(Debug, Default)]
pub struct KeyboardEmitter {
    pipes: HashMap<EventName, EventPipe>,
}

impl KeyboardEmitter {
    pub fn new() -> Self {
        KeyboardEmitter::default()
    }

    pub fn key_pressed(&self, key: InputKey) {
        if let Some(pipe) = self.pipes.get(&EventName::KeyDown) {
            pipe.emit(Event::KeyDown(key));
        }
    }
}

impl Emitter for KeyboardEmitter {
    fn set_pipe(&mut self, pipe: EventPipe) {
        self.pipes.insert(pipe.name(), pipe);
    }
}

/// Tracks which components the pointer is inside and emits enter/leave
/// pairs as that set changes.
///
/// One emitter produces both event names, so it is bound to the registry
/// twice and keeps a pipe per name.
#[derive(Debug, Default)]
pub struct HoverEmitter {
    pipes: HashMap<EventName, EventPipe>,
    was_entered: HashSet<ComponentId>,
}

impl HoverEmitter {
    pub fn new() -> Self {
        HoverEmitter::default()
    }

    /// Sample the pointer at a position. `enter_capable` and `leave_capable`
    /// are the current subscriber sets for the two event names; only
    /// subscribed components participate in the entered-set tracking.
    pub fn pointer_moved(
        &mut self,
        x: u16,
        y: u16,
        enter_capable: &HashSet<ComponentId>,
        leave_capable: &HashSet<ComponentId>,
        store: &ComponentStore,
    ) {
        let mut now_entered: HashSet<ComponentId> = HashSet::new();
        for id in enter_capable.union(leave_capable) {
            let inside = store
                .get(id)
                .map_or(false, |component| component.contains_point(x, y));
            if inside {
                now_entered.insert(id.clone());
            }
        }

        // each payload carries only components subscribed to that name, so
        // a leave-only component never rides an enter event (or vice versa)
        let entered: HashSet<ComponentId> = now_entered
            .difference(&self.was_entered)
            .filter(|id| enter_capable.contains(*id))
            .cloned()
            .collect();
        let left: HashSet<ComponentId> = self
            .was_entered
            .difference(&now_entered)
            .filter(|id| leave_capable.contains(*id))
            .cloned()
            .collect();

        if !entered.is_empty() {
            if let Some(pipe) = self.pipes.get(&EventName::MouseEnter) {
                pipe.emit(Event::MouseEnter {
                    components: entered,
                });
            }
        }
        if !left.is_empty() {
            if let Some(pipe) = self.pipes.get(&EventName::MouseLeave) {
                pipe.emit(Event::MouseLeave { components: left });
            }
        }

        // replaced even when nothing was emitted, so a later sample diffs
        // against the true current set
        self.was_entered = now_entered;
    }

    /// The pointer left the surface: everything currently entered is left.
    pub fn pointer_left(&mut self) {
        let previous = std::mem::take(&mut self.was_entered);
        if previous.is_empty() {
            return;
        }
        if let Some(pipe) = self.pipes.get(&EventName::MouseLeave) {
            pipe.emit(Event::MouseLeave {
                components: previous,
            });
        }
    }
}

impl Emitter for HoverEmitter {
    fn set_pipe(&mut self, pipe: EventPipe) {
        self.pipes.insert(pipe.name(), pipe);
    }
}
