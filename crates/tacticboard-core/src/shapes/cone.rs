//! Training cone.

use super::{ObjectId, ObjectTrait, circle_bounds, within_circle};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A triangular cone marker inscribed in a circle of `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub(crate) id: ObjectId,
    /// Center point.
    pub position: Point,
    /// Circumradius of the triangle in canvas pixels.
    pub radius: f64,
    /// Rotation angle in radians.
    #[serde(default)]
    pub rotation: f64,
}

impl Cone {
    pub fn new(id: ObjectId, position: Point, radius: f64) -> Self {
        Self {
            id,
            position,
            radius,
            rotation: 0.0,
        }
    }

    /// Triangle vertices, apex first, pointing up when rotation is zero.
    pub fn vertices(&self) -> [Point; 3] {
        let step = std::f64::consts::TAU / 3.0;
        let start = -std::f64::consts::FRAC_PI_2 + self.rotation;
        let vertex = |i: f64| {
            let angle = start + step * i;
            Point::new(
                self.position.x + self.radius * angle.cos(),
                self.position.y + self.radius * angle.sin(),
            )
        };
        [vertex(0.0), vertex(1.0), vertex(2.0)]
    }

    /// Closed triangle path for rendering.
    pub fn to_path(&self) -> BezPath {
        let [a, b, c] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }
}

impl ObjectTrait for Cone {
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
        // Circumscribed circle is close enough for a marker this small.
        within_circle(self.position, self.radius, point, tolerance)
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
    fn test_apex_points_up() {
        let cone = Cone::new(ObjectId(0), Point::new(0.0, 0.0), 10.0);
        let [apex, left, right] = cone.vertices();
        assert!(apex.x.abs() < 1e-9);
        assert!((apex.y + 10.0).abs() < 1e-9);
        assert!(left.y > 0.0 && right.y > 0.0);
        assert!((left.y - right.y).abs() < 1e-9);
    }

    #[test]
    fn test_path_is_closed_triangle() {
        let cone = Cone::new(ObjectId(0), Point::new(5.0, 5.0), 4.0);
        assert_eq!(cone.to_path().elements().len(), 4);
    }
}
