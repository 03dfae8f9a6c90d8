//! Tactics Board Render Library
//!
//! Renderer abstraction for the tactics board, plus a headless
//! display-list implementation used by tests and the CLI.

mod display_list;
mod handles;
mod renderer;
mod style;

pub use display_list::{DisplayListRenderer, DrawCommand, DrawItem, NodeId};
pub use handles::HandleRegistry;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, ShapeRenderer};
pub use style::{ObjectStyle, pitch_color, pitch_line_color, selection_color};
