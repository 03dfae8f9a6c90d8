//! Renderer-side lookup from object ids to visual handles.
//!
//! The registry belongs to the renderer. It is rebuilt from whatever scene
//! is on display and is never consulted by the editor core.

use std::collections::HashMap;
use tacticboard_core::scene::Scene;
use tacticboard_core::shapes::{ObjectId, SceneObject};

/// Maps object ids to renderer-owned handles of type `H`.
#[derive(Debug, Clone)]
pub struct HandleRegistry<H> {
    handles: HashMap<ObjectId, H>,
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> HandleRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the registry in line with `scene`.
    ///
    /// Objects without a handle are passed to `mount`; handles whose object
    /// left the scene are passed to `unmount` and dropped. Existing handles
    /// are kept as they are.
    pub fn sync(
        &mut self,
        scene: &Scene,
        mut mount: impl FnMut(&SceneObject) -> H,
        mut unmount: impl FnMut(ObjectId, H),
    ) {
        let stale: Vec<ObjectId> = self
            .handles
            .keys()
            .copied()
            .filter(|id| !scene.contains(*id))
            .collect();
        for id in stale {
            if let Some(handle) = self.handles.remove(&id) {
                unmount(id, handle);
            }
        }

        for object in scene {
            self.handles.entry(object.id()).or_insert_with(|| mount(object));
        }
    }

    /// Get the handle for an object.
    pub fn get(&self, id: ObjectId) -> Option<&H> {
        self.handles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drop every handle, passing each to `unmount`.
    pub fn clear(&mut self, mut unmount: impl FnMut(ObjectId, H)) {
        for (id, handle) in self.handles.drain() {
            unmount(id, handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use tacticboard_core::BoardDocument;
    use tacticboard_core::tools::ToolKind;

    #[test]
    fn test_sync_mounts_and_unmounts() {
        let mut doc = BoardDocument::new();
        let a = doc.place_object(Some(ToolKind::Ball), Some(Point::new(1.0, 1.0)), 10.0).unwrap();
        let b = doc.place_object(Some(ToolKind::Cone), Some(Point::new(2.0, 2.0)), 10.0).unwrap();

        let mut registry: HandleRegistry<String> = HandleRegistry::new();
        let mut unmounted = Vec::new();
        registry.sync(doc.scene(), |o| format!("node-{}", o.id().0), |id, _| unmounted.push(id));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(a).map(String::as_str), Some("node-0"));

        doc.undo();
        registry.sync(doc.scene(), |o| format!("node-{}", o.id().0), |id, _| unmounted.push(id));
        assert_eq!(unmounted, vec![b]);
        assert!(registry.get(b).is_none());
    }

    #[test]
    fn test_existing_handles_are_kept() {
        let mut doc = BoardDocument::new();
        let a = doc.place_object(Some(ToolKind::Ball), Some(Point::new(1.0, 1.0)), 10.0).unwrap();

        let mut mounts = 0;
        let mut registry: HandleRegistry<u32> = HandleRegistry::new();
        registry.sync(doc.scene(), |_| { mounts += 1; mounts }, |_, _| {});
        doc.move_object(a, Point::new(9.0, 9.0));
        registry.sync(doc.scene(), |_| { mounts += 1; mounts }, |_, _| {});

        assert_eq!(mounts, 1);
        assert_eq!(registry.get(a), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut doc = BoardDocument::new();
        doc.place_object(Some(ToolKind::PlayerRed), Some(Point::ZERO), 10.0);
        let mut registry: HandleRegistry<()> = HandleRegistry::new();
        registry.sync(doc.scene(), |_| (), |_, _| {});

        let mut count = 0;
        registry.clear(|_, _| count += 1);
        assert_eq!(count, 1);
        assert!(registry.is_empty());
    }
}
