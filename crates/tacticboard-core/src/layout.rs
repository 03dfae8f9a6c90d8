//! Canvas sizing.
//!
//! The canvas follows its container's width up to a configured maximum and
//! keeps a fixed aspect ratio. The pitch length is mapped onto the canvas
//! width, which gives the pixels-per-metre scale used to size new objects.

use crate::config::BoardConfig;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the canvas and the derived scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pixels per metre.
    pub scale: f64,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::from_container_width(f64::INFINITY, &BoardConfig::default())
    }
}

impl CanvasLayout {
    /// Compute the layout for a container of the given width.
    ///
    /// Non-finite or negative widths are treated as zero, except positive
    /// infinity which means "unbounded" and yields the maximum width.
    pub fn from_container_width(container_width: f64, config: &BoardConfig) -> Self {
        let available = if container_width.is_nan() {
            0.0
        } else {
            container_width.max(0.0)
        };
        let width = available.min(config.max_canvas_width);
        let height = width / config.aspect_ratio;
        let scale = width / config.pitch_length;
        Self { width, height, scale }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The canvas as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }

    /// Check if a point lies on the canvas.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_bounded() {
        let config = BoardConfig::default();
        let layout = CanvasLayout::from_container_width(1600.0, &config);
        assert!((layout.width - 1000.0).abs() < f64::EPSILON);
        assert!((layout.height - 500.0).abs() < f64::EPSILON);
        assert!((layout.scale - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_narrow_container() {
        let config = BoardConfig::default();
        let layout = CanvasLayout::from_container_width(600.0, &config);
        assert!((layout.width - 600.0).abs() < f64::EPSILON);
        assert!((layout.height - 300.0).abs() < f64::EPSILON);
        assert!((layout.scale - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_widths() {
        let config = BoardConfig::default();
        assert!(CanvasLayout::from_container_width(-5.0, &config).width.abs() < f64::EPSILON);
        assert!(CanvasLayout::from_container_width(f64::NAN, &config).width.abs() < f64::EPSILON);
        let unbounded = CanvasLayout::default();
        assert!((unbounded.width - config.max_canvas_width).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains() {
        let layout = CanvasLayout::from_container_width(800.0, &BoardConfig::default());
        assert!(layout.contains(Point::new(400.0, 200.0)));
        assert!(layout.contains(Point::new(800.0, 400.0)));
        assert!(!layout.contains(Point::new(-1.0, 200.0)));
        assert!(!layout.contains(Point::new(400.0, 401.0)));
        assert!(!layout.contains(Point::new(f64::NAN, 0.0)));
    }
}
