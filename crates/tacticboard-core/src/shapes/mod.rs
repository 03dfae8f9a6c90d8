//! Object definitions for the tactics board.
//!
//! Objects are pure data. Their geometry is fixed at creation; only the
//! position changes afterwards, and only through the history controller.

mod ball;
mod cone;
mod goal;
mod player;

pub use ball::Ball;
pub use cone::Cone;
pub use goal::Goal;
pub use player::{Player, TeamColor};

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Identifier of an object on the board.
///
/// Unique within a board for the lifetime of its history: ids come from an
/// [`IdAllocator`] and are never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`ObjectId`]s.
///
/// Once `u64::MAX` has been handed out (or reserved) the allocator is
/// exhausted and every further request yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
    exhausted: bool,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `id` and everything below it is never handed out.
    pub fn reserve_through(&mut self, id: ObjectId) {
        if self.exhausted || self.next > id.0 {
            return;
        }
        match id.0.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
    }

    /// Hand out the next id, or `None` once the id space is used up.
    pub fn allocate(&mut self) -> Option<ObjectId> {
        if self.exhausted {
            return None;
        }
        let id = self.next;
        match id.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        Some(ObjectId(id))
    }
}

/// Common trait for all board objects.
pub trait ObjectTrait {
    /// Get the unique identifier.
    fn id(&self) -> ObjectId;

    /// Anchor position in canvas pixels.
    fn position(&self) -> Point;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point hits this object.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// A copy of this object anchored at `position`, all other fields kept.
    fn with_position(&self, position: Point) -> Self
    where
        Self: Sized;
}

/// Enum wrapper for all object types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Player(Player),
    Ball(Ball),
    Cone(Cone),
    Goal(Goal),
}

impl SceneObject {
    pub fn id(&self) -> ObjectId {
        match self {
            SceneObject::Player(o) => o.id(),
            SceneObject::Ball(o) => o.id(),
            SceneObject::Cone(o) => o.id(),
            SceneObject::Goal(o) => o.id(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            SceneObject::Player(o) => o.position(),
            SceneObject::Ball(o) => o.position(),
            SceneObject::Cone(o) => o.position(),
            SceneObject::Goal(o) => o.position(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            SceneObject::Player(o) => o.bounds(),
            SceneObject::Ball(o) => o.bounds(),
            SceneObject::Cone(o) => o.bounds(),
            SceneObject::Goal(o) => o.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            SceneObject::Player(o) => o.hit_test(point, tolerance),
            SceneObject::Ball(o) => o.hit_test(point, tolerance),
            SceneObject::Cone(o) => o.hit_test(point, tolerance),
            SceneObject::Goal(o) => o.hit_test(point, tolerance),
        }
    }

    pub fn with_position(&self, position: Point) -> Self {
        match self {
            SceneObject::Player(o) => SceneObject::Player(o.with_position(position)),
            SceneObject::Ball(o) => SceneObject::Ball(o.with_position(position)),
            SceneObject::Cone(o) => SceneObject::Cone(o.with_position(position)),
            SceneObject::Goal(o) => SceneObject::Goal(o.with_position(position)),
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SceneObject::Player(_) => "player",
            SceneObject::Ball(_) => "ball",
            SceneObject::Cone(_) => "cone",
            SceneObject::Goal(_) => "goal",
        }
    }

    /// Check that every coordinate and dimension is a finite number.
    pub fn is_finite(&self) -> bool {
        let p = self.position();
        let dims = match self {
            SceneObject::Player(o) => [o.radius, o.rotation],
            SceneObject::Ball(o) => [o.radius, o.rotation],
            SceneObject::Cone(o) => [o.radius, o.rotation],
            SceneObject::Goal(o) => [o.width, o.height],
        };
        p.is_finite() && dims.iter().all(|d| d.is_finite())
    }
}

/// Check whether a point lies within `radius + tolerance` of `center`.
pub(crate) fn within_circle(center: Point, radius: f64, point: Point, tolerance: f64) -> bool {
    let reach = radius + tolerance;
    (point - center).hypot2() <= reach * reach
}

/// Bounding box of a circle.
pub(crate) fn circle_bounds(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}
