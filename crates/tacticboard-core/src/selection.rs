//! Single-object selection.

use crate::shapes::ObjectId;

/// The currently selected object, if any.
///
/// Owned by the UI layer. History operations never read it; the canvas
/// clears it on undo, redo and clear, and sets it on placement and
/// pointer-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ObjectId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection.
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected id.
    pub fn get(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces() {
        let mut selection = Selection::new();
        assert!(selection.is_empty());

        selection.select(ObjectId(1));
        selection.select(ObjectId(2));
        assert!(selection.is_selected(ObjectId(2)));
        assert!(!selection.is_selected(ObjectId(1)));

        selection.clear();
        assert_eq!(selection.get(), None);
    }
}
