//! Word-entry direction vectors and arrow rotation resolution

use serde::{Deserialize, Serialize};

/// Unit vector describing which neighbor is "next" during word entry.
///
/// `x` moves along columns, `y` along rows; rows grow downward, so "down"
/// is `(0, 1)` and "up" is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionTranslation {
    pub x: i32,
    pub y: i32,
}

impl DirectionTranslation {
    pub const RIGHT: DirectionTranslation = DirectionTranslation { x: 1, y: 0 };
    pub const LEFT: DirectionTranslation = DirectionTranslation { x: -1, y: 0 };
    pub const UP: DirectionTranslation = DirectionTranslation { x: 0, y: -1 };
    pub const DOWN: DirectionTranslation = DirectionTranslation { x: 0, y: 1 };

    /// Resolve an arrow rotation (in degrees) to a direction.
    ///
    /// Angles are bucketed into four quadrants, each pre-offset by 45 degrees
    /// so bucket boundaries fall cleanly between axis directions: exact
    /// multiples of 90 always classify to the axis they point along.
    pub fn for_rotation(degrees: f32) -> DirectionTranslation {
        let normalized = degrees.rem_euclid(360.0);
        if !(45.0..315.0).contains(&normalized) {
            DirectionTranslation::RIGHT
        } else if normalized < 135.0 {
            DirectionTranslation::UP
        } else if normalized < 225.0 {
            DirectionTranslation::LEFT
        } else {
            DirectionTranslation::DOWN
        }
    }

    /// The opposite direction, used by the backspace walk.
    pub fn negated(self) -> DirectionTranslation {
        DirectionTranslation {
            x: -self.x,
            y: -self.y,
        }
    }
}
