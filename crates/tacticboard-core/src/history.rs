//! Branchable snapshot history.
//!
//! The timeline always starts with the empty scene and the cursor always
//! points at a valid snapshot. New snapshots are only added by
//! [`History::commit`], which discards any redo branch and suppresses edits
//! that leave the scene unchanged.

use crate::scene::Scene;

/// Linear undo/redo history over scene snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    timeline: Vec<Scene>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A history holding only the empty scene.
    pub fn new() -> Self {
        Self {
            timeline: vec![Scene::new()],
            cursor: 0,
        }
    }

    /// The scene at the cursor.
    pub fn current(&self) -> &Scene {
        &self.timeline[self.cursor]
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial empty one.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Always false: the timeline always holds the initial snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All snapshots, oldest first.
    pub fn timeline(&self) -> &[Scene] {
        &self.timeline
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.timeline.len()
    }

    /// Record `scene` as the new current snapshot.
    ///
    /// Snapshots after the cursor are dropped first. If `scene` equals the
    /// current snapshot nothing is recorded and `false` is returned.
    pub fn commit(&mut self, scene: Scene) -> bool {
        if *self.current() == scene {
            log::trace!("Commit suppressed: scene unchanged at cursor {}", self.cursor);
            return false;
        }

        let discarded = self.timeline.len() - (self.cursor + 1);
        self.timeline.truncate(self.cursor + 1);
        if discarded > 0 {
            log::debug!("Discarded {discarded} redo snapshot(s)");
        }

        self.timeline.push(scene);
        self.cursor = self.timeline.len() - 1;
        log::debug!("Committed snapshot {} ({} objects)", self.cursor, self.current().len());
        true
    }

    /// Step back one snapshot.
    /// Returns true if undo was performed, false if already at the start.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        log::debug!("Undo to snapshot {}", self.cursor);
        true
    }

    /// Step forward one snapshot.
    /// Returns true if redo was performed, false if already at the end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        log::debug!("Redo to snapshot {}", self.cursor);
        true
    }
}
