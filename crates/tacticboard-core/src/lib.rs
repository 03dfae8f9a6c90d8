//! Tactics Board Core Library
//!
//! Scene model and edit history for a 2D sports tactics board. Rendering
//! and input plumbing live outside this crate; they read the current
//! [`Scene`] and feed [`BoardEvent`]s in.

pub mod canvas;
pub mod config;
pub mod history;
pub mod input;
pub mod layout;
pub mod pitch;
pub mod scene;
pub mod selection;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use canvas::{BackgroundImage, BoardDocument, Canvas, SavedBoard};
pub use config::{BoardConfig, ConfigError, ObjectSizes};
pub use history::History;
pub use input::{BoardEvent, EventOutcome};
pub use layout::CanvasLayout;
pub use pitch::{Marking, PitchMarkings};
pub use scene::Scene;
pub use selection::Selection;
pub use shapes::{IdAllocator, ObjectId, SceneObject, TeamColor};
pub use tools::{ToolKind, ToolManager, create_object};
