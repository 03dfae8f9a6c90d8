//! Ordered scenes of board objects.

use crate::shapes::{ObjectId, SceneObject};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The objects on the board at one point in time.
///
/// Order is z-order and render order: later objects draw on top. Ids are
/// unique. A scene has no in-place mutators: edits build a new scene, so
/// consumers such as renderers can hold a `&Scene` without ever changing
/// what history recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SceneObject>", into = "Vec<SceneObject>")]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from objects, dropping any later duplicate of an id.
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let objects = objects
            .into_iter()
            .filter(|o| seen.insert(o.id()))
            .collect();
        Self { objects }
    }

    /// Objects in render order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Objects as a slice, in render order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by id.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in render order.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(SceneObject::id).collect()
    }

    /// Highest id present, if any.
    pub fn max_id(&self) -> Option<ObjectId> {
        self.objects.iter().map(SceneObject::id).max()
    }

    /// Find objects at a point, front to back.
    pub fn objects_at_point(&self, point: Point, tolerance: f64) -> Vec<ObjectId> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.hit_test(point, tolerance))
            .map(SceneObject::id)
            .collect()
    }

    /// Get the bounding box of all objects.
    pub fn bounds(&self) -> Option<Rect> {
        self.objects
            .iter()
            .map(SceneObject::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Check that every object has finite geometry.
    pub fn is_finite(&self) -> bool {
        self.objects.iter().all(SceneObject::is_finite)
    }

    /// This scene with `object` added on top. The id must be new.
    pub(crate) fn with_appended(&self, object: SceneObject) -> Self {
        debug_assert!(!self.contains(object.id()), "duplicate object id {}", object.id());
        let mut objects = self.objects.clone();
        objects.push(object);
        Self { objects }
    }

    /// This scene with object `id` moved to `position`, or `None` if absent.
    pub(crate) fn with_moved(&self, id: ObjectId, position: Point) -> Option<Self> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        let mut objects = self.objects.clone();
        objects[index] = objects[index].with_position(position);
        Some(Self { objects })
    }
}

impl From<Vec<SceneObject>> for Scene {
    fn from(objects: Vec<SceneObject>) -> Self {
        Self::from_objects(objects)
    }
}

impl From<Scene> for Vec<SceneObject> {
    fn from(scene: Scene) -> Self {
        scene.objects
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
