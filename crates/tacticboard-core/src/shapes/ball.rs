//! Ball marker.

use super::{ObjectId, ObjectTrait, circle_bounds, within_circle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The ball. Its visual style is fixed (white fill, dark outline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub(crate) id: ObjectId,
    /// Center point.
    pub position: Point,
    /// Radius in canvas pixels.
    pub radius: f64,
    /// Rotation angle in radians.
    #[serde(default)]
    pub rotation: f64,
}

impl Ball {
    pub fn new(id: ObjectId, position: Point, radius: f64) -> Self {
        Self {
            id,
            position,
            radius,
            rotation: 0.0,
        }
    }
}

impl ObjectTrait for Ball {
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
