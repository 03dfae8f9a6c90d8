//! Player marker.

use super::{ObjectId, ObjectTrait, circle_bounds, within_circle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Team a player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Red,
}

impl TeamColor {
    pub fn name(self) -> &'static str {
        match self {
            TeamColor::Blue => "blue",
            TeamColor::Red => "red",
        }
    }
}

/// A circular player token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: ObjectId,
    /// Center point.
    pub position: Point,
    /// Team color.
    pub color: TeamColor,
    /// Radius in canvas pixels.
    pub radius: f64,
    /// Rotation angle in radians.
    #[serde(default)]
    pub rotation: f64,
}

impl Player {
    /// Create a new player.
    pub fn new(id: ObjectId, position: Point, color: TeamColor, radius: f64) -> Self {
        Self {
            id,
            position,
            color,
            radius,
            rotation: 0.0,
        }
    }
}

impl ObjectTrait for Player {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn bounds(&self) -> Rect {
        circle_bounds(self.position, self.radius)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        within_circle(self.position, self.radius, point, tolerance)
    }

    fn with_position(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}
