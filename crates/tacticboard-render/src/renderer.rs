//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use tacticboard_core::canvas::{BackgroundImage, Canvas};
use tacticboard_core::pitch::PitchMarkings;
use tacticboard_core::shapes::SceneObject;
use thiserror::Error;

use crate::style::{pitch_color, pitch_line_color, selection_color};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Background image has no source")]
    MissingBackgroundSource,
    #[error("Background image opacity out of range: {0}")]
    BackgroundOpacity(f64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render. Read-only: renderers never edit the scene.
    pub canvas: &'a Canvas,
    /// Pitch surface color.
    pub background_color: Color,
    /// Color of the pitch lines.
    pub line_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
    /// Whether to draw the pitch markings.
    pub show_pitch: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: pitch_color(),
            line_color: pitch_line_color(),
            selection_color: selection_color(),
            show_pitch: true,
        }
    }

    /// Toggle pitch markings.
    pub fn with_pitch(mut self, show: bool) -> Self {
        self.show_pitch = show;
        self
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Size {
        self.canvas.layout.size()
    }

    /// Objects in render order.
    pub fn objects(&self) -> impl Iterator<Item = &'a SceneObject> {
        self.canvas.scene().iter()
    }

    /// The reference image, checked for a usable source and opacity.
    pub fn background_image(&self) -> RenderResult<Option<&'a BackgroundImage>> {
        let Some(image) = self.canvas.background.as_ref() else {
            return Ok(None);
        };
        if image.source.trim().is_empty() {
            return Err(RendererError::MissingBackgroundSource);
        }
        if !(0.0..=1.0).contains(&image.opacity) {
            return Err(RendererError::BackgroundOpacity(image.opacity));
        }
        Ok(Some(image))
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the draw commands for a frame.
    ///
    /// Objects must be drawn in scene order so later objects end up on top.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Helper trait for object rendering (used internally by renderers).
pub trait ShapeRenderer {
    /// Render one object, highlighted if selected.
    fn render_object(&mut self, object: &SceneObject, selected: bool);

    /// Render the pitch lines.
    fn render_pitch(&mut self, pitch: &PitchMarkings, color: Color);

    /// Render the reference image behind everything else.
    fn render_background_image(&mut self, image: &BackgroundImage, size: Size);
}
