//! Direction-arrow affordance shown during direction selection

use wordboard_core::{Action, BoardModel, ComponentId, DirectionTranslation};

use crate::component::{Bounds, DrawSurface, Paint, UiComponent};
use crate::events::Event;

/// One full pulse cycle of the arrow animation, in milliseconds.
const PULSE_MILLIS: u64 = 500;

/// Clickable arrow pointing along one of the four axis directions.
///
/// The rotation is stored in degrees; 0 points right and angles grow
/// counter-clockwise, so the downward arrow sits at 270.
#[derive(Debug, Clone)]
pub struct ArrowComponent {
    id: ComponentId,
    bounds: Bounds,
    rotation_degrees: f32,
    pulse_elapsed: u64,
}

impl ArrowComponent {
    pub fn new(bounds: Bounds, rotation_degrees: f32) -> Self {
        ArrowComponent {
            id: ComponentId::new(format!(
                "arrow-{}-{}-{}",
                bounds.x, bounds.y, rotation_degrees as i32
            )),
            bounds,
            rotation_degrees,
            pulse_elapsed: 0,
        }
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Resolve this arrow's rotation to a word-entry direction.
    pub fn direction(&self) -> DirectionTranslation {
        DirectionTranslation::for_rotation(self.rotation_degrees)
    }

    fn glyph(&self) -> &'static str {
        let d = self.direction();
        match (d.x, d.y) {
            (1, 0) => "→",
            (-1, 0) => "←",
            (0, -1) => "↑",
            _ => "↓",
        }
    }

    fn paint(&self) -> Paint {
        if self.pulse_elapsed < PULSE_MILLIS / 2 {
            Paint::Arrow
        } else {
            Paint::ArrowPulse
        }
    }
}

impl UiComponent for ArrowComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn draw(&self, _board: &BoardModel, surface: &mut dyn DrawSurface) {
        surface.put_text(
            self.bounds.center_x(),
            self.bounds.center_y(),
            self.glyph(),
            self.paint(),
        );
    }

    fn step(&mut self, delta_millis: u64) {
        self.pulse_elapsed = (self.pulse_elapsed + delta_millis) % PULSE_MILLIS;
    }

    fn event_fired(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Click { .. } => Some(Action::Select(self.id.clone())),
            _ => None,
        }
    }

    fn contains_point(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_resolution() {
        let right = ArrowComponent::new(Bounds::new(0, 0, 4, 2), 0.0);
        assert_eq!(right.direction(), DirectionTranslation::RIGHT);

        let down = ArrowComponent::new(Bounds::new(0, 0, 4, 2), 270.0);
        assert_eq!(down.direction(), DirectionTranslation::DOWN);
    }

    #[test]
    fn test_glyphs_follow_direction() {
        assert_eq!(ArrowComponent::new(Bounds::new(0, 0, 1, 1), 0.0).glyph(), "→");
        assert_eq!(
            ArrowComponent::new(Bounds::new(0, 0, 1, 1), 90.0).glyph(),
            "↑"
        );
        assert_eq!(
            ArrowComponent::new(Bounds::new(0, 0, 1, 1), 180.0).glyph(),
            "←"
        );
        assert_eq!(
            ArrowComponent::new(Bounds::new(0, 0, 1, 1), 270.0).glyph(),
            "↓"
        );
    }

    #[test]
    fn test_click_produces_select() {
        let mut arrow = ArrowComponent::new(Bounds::new(2, 2, 4, 2), 0.0);
        let action = arrow.event_fired(&Event::Click { x: 3, y: 3 });
        assert_eq!(action, Some(Action::Select(arrow.id().clone())));
    }

    #[test]
    fn test_pulse_wraps() {
        let mut arrow = ArrowComponent::new(Bounds::new(0, 0, 4, 2), 0.0);
        assert_eq!(arrow.paint(), Paint::Arrow);
        arrow.step(300);
        assert_eq!(arrow.paint(), Paint::ArrowPulse);
        arrow.step(300);
        assert_eq!(arrow.paint(), Paint::Arrow);
    }

    #[test]
    fn test_ids_distinct_per_placement() {
        let a = ArrowComponent::new(Bounds::new(0, 0, 4, 2), 0.0);
        let b = ArrowComponent::new(Bounds::new(4, 0, 4, 2), 270.0);
        assert_ne!(a.id(), b.id());
    }
}
