//! Pitch markings drawn beneath the objects.

use crate::layout::CanvasLayout;
use kurbo::{Circle, Point, Rect};

/// Stroke width of the boundary line, in pixels at full size.
const BOUNDARY_STROKE: f64 = 4.0;

/// Stroke width of the inner lines.
const LINE_STROKE: f64 = 2.0;

/// One line element of the pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marking {
    Rect { rect: Rect, stroke_width: f64 },
    Circle { circle: Circle, stroke_width: f64 },
}

/// The fixed futsal markings for a canvas: outer boundary, a centre zone
/// covering the middle third of the length, and a centre circle.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchMarkings {
    pub markings: Vec<Marking>,
}

impl PitchMarkings {
    /// Markings sized for `layout`.
    pub fn for_layout(layout: &CanvasLayout) -> Self {
        let (w, h) = (layout.width, layout.height);
        let centre = Point::new(w / 2.0, h / 2.0);

        let markings = vec![
            Marking::Rect {
                rect: Rect::new(0.0, 0.0, w, h),
                stroke_width: BOUNDARY_STROKE,
            },
            Marking::Rect {
                rect: Rect::new(w / 3.0, 0.0, 2.0 * w / 3.0, h),
                stroke_width: LINE_STROKE,
            },
            Marking::Circle {
                circle: Circle::new(centre, w / 15.0),
                stroke_width: LINE_STROKE,
            },
        ];

        Self { markings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marking> {
        self.markings.iter()
    }
}
