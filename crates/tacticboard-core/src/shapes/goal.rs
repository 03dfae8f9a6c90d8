//! Goal frame.

use super::{ObjectId, ObjectTrait, SerializableColor};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangular goal, anchored by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub(crate) id: ObjectId,
    /// Center point.
    pub position: Point,
    /// Width in canvas pixels.
    pub width: f64,
    /// Height in canvas pixels.
    pub height: f64,
    /// Frame color.
    pub color: SerializableColor,
}

impl Goal {
    pub fn new(id: ObjectId, position: Point, width: f64, height: f64, color: SerializableColor) -> Self {
        Self {
            id,
            position,
            width,
            height,
            color,
        }
    }

    /// Top-left corner (center offset by half the extent).
    pub fn origin(&self) -> Point {
        Point::new(
            self.position.x - self.width / 2.0,
            self.position.y - self.height / 2.0,
        )
    }

    /// Get the goal as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_center_size(self.position, (self.width, self.height))
    }
}

impl ObjectTrait for Goal {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }

    fn with_position(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_offset_by_half_extent() {
        let goal = Goal::new(ObjectId(0), Point::new(100.0, 50.0), 10.0, 40.0, SerializableColor::white());
        let origin = goal.origin();
        assert!((origin.x - 95.0).abs() < f64::EPSILON);
        assert!((origin.y - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let goal = Goal::new(ObjectId(0), Point::new(0.0, 0.0), 10.0, 20.0, SerializableColor::white());
        assert!(goal.hit_test(Point::new(4.0, 9.0), 0.0));
        assert!(!goal.hit_test(Point::new(6.0, 0.0), 0.0));
        assert!(goal.hit_test(Point::new(6.0, 0.0), 1.5));
    }
}
