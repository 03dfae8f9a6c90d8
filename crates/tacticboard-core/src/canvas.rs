//! Board document and canvas state management.

use crate::config::BoardConfig;
use crate::history::History;
use crate::layout::CanvasLayout;
use crate::pitch::PitchMarkings;
use crate::scene::Scene;
use crate::selection::Selection;
use crate::shapes::{IdAllocator, ObjectId};
use crate::tools::{ToolKind, ToolManager, create_object};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized form of a board: identity plus the current scene.
///
/// History is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBoard {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Objects in render order.
    pub scene: Scene,
}

/// A board document: the history controller.
///
/// This is the only writer of scene state. Every edit builds a new scene
/// and goes through [`BoardDocument::commit`], which drops the redo branch
/// and ignores edits that change nothing.
#[derive(Debug, Clone)]
pub struct BoardDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    history: History,
    ids: IdAllocator,
    config: BoardConfig,
}

impl Default for BoardDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardDocument {
    /// Create a new empty document with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create a new empty document.
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            history: History::new(),
            ids: IdAllocator::new(),
            config,
        }
    }

    /// Restore a saved board. The saved scene becomes the first edit on top
    /// of the empty initial snapshot, so it can be undone like any other.
    pub fn from_saved(saved: SavedBoard, config: BoardConfig) -> Self {
        let mut doc = Self::with_config(config);
        doc.id = saved.id;
        doc.name = saved.name;
        doc.commit(saved.scene);
        doc
    }

    /// Snapshot identity and current scene for storage.
    pub fn to_saved(&self) -> SavedBoard {
        SavedBoard {
            id: self.id.clone(),
            name: self.name.clone(),
            scene: self.scene().clone(),
        }
    }

    /// Serialize the current board to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_saved())
    }

    /// Deserialize a board from JSON.
    pub fn from_json(json: &str, config: BoardConfig) -> Result<Self, serde_json::Error> {
        let saved: SavedBoard = serde_json::from_str(json)?;
        Ok(Self::from_saved(saved, config))
    }

    /// The current scene (read-only).
    pub fn scene(&self) -> &Scene {
        self.history.current()
    }

    /// The underlying history (read-only).
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Number of snapshots in the timeline.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if the current scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.scene().is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Record a new scene. Returns false if it matched the current one or
    /// holds non-finite geometry.
    ///
    /// Ids already present in `scene` are never handed out afterwards.
    pub fn commit(&mut self, scene: Scene) -> bool {
        if !scene.is_finite() {
            log::warn!("Rejecting scene with non-finite geometry");
            return false;
        }
        if let Some(max) = scene.max_id() {
            self.ids.reserve_through(max);
        }
        self.history.commit(scene)
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Remove every object. Clearing an empty board records nothing.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.commit(Scene::new())
    }

    /// Move object `id` to `position`.
    /// Returns true if a new snapshot was recorded.
    pub fn move_object(&mut self, id: ObjectId, position: Point) -> bool {
        if !position.is_finite() {
            log::warn!("Ignoring move of {id} to non-finite point {position:?}");
            return false;
        }
        let Some(moved) = self.scene().with_moved(id, position) else {
            log::warn!("Ignoring move of unknown object {id}");
            return false;
        };
        self.commit(moved)
    }

    /// Create an object with `tool` at `point` and put it on top.
    /// Returns the new object's id, or `None` if nothing was placed.
    pub fn place_object(&mut self, tool: Option<ToolKind>, point: Option<Point>, scale: f64) -> Option<ObjectId> {
        let object = create_object(tool, point, scale, &self.config, &mut self.ids)?;
        let id = object.id();
        let scene = self.scene().with_appended(object);
        self.commit(scene).then_some(id)
    }
}

/// Reference to the image drawn behind the pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Path or URL, resolved by the renderer.
    pub source: String,
    /// 0.0 = invisible, 1.0 = fully opaque.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl BackgroundImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            opacity: 1.0,
        }
    }
}

/// Runtime canvas state (not persisted).
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: BoardDocument,
    /// Tool manager.
    pub tool_manager: ToolManager,
    /// Currently selected object.
    pub selection: Selection,
    /// Canvas pixel dimensions.
    pub layout: CanvasLayout,
    /// Optional background image.
    pub background: Option<BackgroundImage>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_document(BoardDocument::new())
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: BoardDocument) -> Self {
        let layout = CanvasLayout::from_container_width(f64::INFINITY, document.config());
        Self {
            document,
            tool_manager: ToolManager::new(),
            selection: Selection::new(),
            layout,
            background: None,
        }
    }

    /// The current scene (read-only).
    pub fn scene(&self) -> &Scene {
        self.document.scene()
    }

    /// Recompute the layout for a new container width.
    /// Objects already on the board keep their pixel geometry.
    pub fn resize(&mut self, container_width: f64) {
        self.layout = CanvasLayout::from_container_width(container_width, self.document.config());
        log::debug!(
            "Canvas resized to {:.0}x{:.0} ({:.2} px/m)",
            self.layout.width,
            self.layout.height,
            self.layout.scale
        );
    }

    /// Pitch markings for the current layout.
    pub fn pitch(&self) -> PitchMarkings {
        PitchMarkings::for_layout(&self.layout)
    }

    pub fn set_background(&mut self, background: Option<BackgroundImage>) {
        self.background = background;
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: Option<ToolKind>) {
        self.tool_manager.set_tool(tool);
    }

    /// Place an object with the active tool and select it.
    pub fn place(&mut self, point: Option<Point>) -> Option<ObjectId> {
        let id = self
            .document
            .place_object(self.tool_manager.current_tool, point, self.layout.scale)?;
        self.selection.select(id);
        Some(id)
    }

    /// Select an object that received a pointer-down.
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: ObjectId) -> bool {
        if !self.scene().contains(id) {
            log::warn!("Ignoring selection of unknown object {id}");
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check if an object is selected.
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.is_selected(id)
    }

    /// Move an object at the end of a drag.
    pub fn move_object(&mut self, id: ObjectId, position: Point) -> bool {
        self.document.move_object(id, position)
    }

    pub fn undo(&mut self) -> bool {
        let done = self.document.undo();
        if done {
            self.selection.clear();
        }
        done
    }

    pub fn redo(&mut self) -> bool {
        let done = self.document.redo();
        if done {
            self.selection.clear();
        }
        done
    }

    /// Clear the board.
    pub fn clear(&mut self) -> bool {
        let done = self.document.clear();
        if done {
            self.selection.clear();
        }
        done
    }
}
