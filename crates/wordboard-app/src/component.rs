//! UI component contract and shared drawing/geometry types

use wordboard_core::{Action, BoardModel, ComponentId};

use crate::events::Event;

/// Axis-aligned rectangle in surface (terminal cell) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Point containment, inclusive of the left/top edge, exclusive of the
    /// right/bottom edge.
    pub fn contains(&self, px: u16, py: u16) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Horizontal center, for glyph placement.
    pub fn center_x(&self) -> u16 {
        self.x + self.width / 2
    }

    /// Vertical center, for glyph placement.
    pub fn center_y(&self) -> u16 {
        self.y + self.height / 2
    }
}

/// Rendering/priority layer. Higher layers win pointer-event contention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    BoardFrame,
    Tiles,
    /// Transient affordances (direction arrows) drawn above the tiles
    Overlay,
}

impl Layer {
    pub fn z_index(self) -> u8 {
        match self {
            Layer::Background => 0,
            Layer::BoardFrame => 1,
            Layer::Tiles => 2,
            Layer::Overlay => 3,
        }
    }
}

/// Semantic paint selector. The frontend maps these to concrete styles; the
/// engine never names a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    TileIdle,
    TileHighlight,
    TileUnfocused,
    TileWaiting,
    TileEntered,
    TileFrozen,
    Letter,
    Arrow,
    ArrowPulse,
    Frame,
}

/// Minimal drawing surface the frontend provides to components.
pub trait DrawSurface {
    /// Fill a rectangle with the background of the given paint.
    fn fill(&mut self, bounds: Bounds, paint: Paint);

    /// Write text starting at a position.
    fn put_text(&mut self, x: u16, y: u16, text: &str, paint: Paint);
}

/// Capability set of any visual/interactive board element.
///
/// Components manage their own visual state and draw themselves; they never
/// reach back into the controller. Events delivered via `event_fired` may
/// produce an [`Action`] which the host routes to the controller.
pub trait UiComponent {
    /// Stable id, unique over all non-equivalent instances.
    fn id(&self) -> &ComponentId;

    /// Redraw onto the surface. The board model is read-only here.
    fn draw(&self, board: &BoardModel, surface: &mut dyn DrawSurface);

    /// Per-tick animation/state update.
    fn step(&mut self, _delta_millis: u64) {}

    /// Accept a dispatched event. The base behavior is a no-op.
    fn event_fired(&mut self, _event: &Event) -> Option<Action> {
        None
    }

    /// Whether the point overlaps this component.
    fn contains_point(&self, _x: u16, _y: u16) -> bool {
        false
    }

    fn is_visible(&self) -> bool {
        true
    }
}
