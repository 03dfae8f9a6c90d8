//! Headless renderer that records draw commands.

use kurbo::{BezPath, Rect, Shape as KurboShape, Size};
use peniko::Color;
use tacticboard_core::canvas::BackgroundImage;
use tacticboard_core::pitch::{Marking, PitchMarkings};
use tacticboard_core::shapes::{ObjectId, SceneObject};

use crate::handles::HandleRegistry;
use crate::renderer::{RenderContext, RenderResult, Renderer, ShapeRenderer};
use crate::style::{ObjectStyle, selection_color};

/// Path flattening tolerance.
const TOLERANCE: f64 = 0.1;

/// Gap between an object and its selection outline, in pixels.
const SELECTION_MARGIN: f64 = 3.0;

/// Identifier of a mounted visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// A single drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Image { source: String, rect: Rect, opacity: f64 },
    Fill { path: BezPath, color: Color },
    Stroke { path: BezPath, color: Color, width: f64 },
}

/// A draw command and the object it belongs to, if any.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub command: DrawCommand,
    pub object: Option<ObjectId>,
    pub node: Option<NodeId>,
}

/// Renderer that builds a flat list of [`DrawItem`]s.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    items: Vec<DrawItem>,
    nodes: HandleRegistry<NodeId>,
    next_node: u64,
    selection_color: Option<Color>,
    current: Option<(ObjectId, NodeId)>,
}

impl DisplayListRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw items from the last frame, in paint order.
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Objects in the order they were painted (one entry per object).
    pub fn painted_objects(&self) -> Vec<ObjectId> {
        let mut order: Vec<ObjectId> = Vec::new();
        for id in self.items.iter().filter_map(|item| item.object) {
            if order.last() != Some(&id) {
                order.push(id);
            }
        }
        order
    }

    /// The visual node mounted for an object.
    pub fn node_for(&self, id: ObjectId) -> Option<NodeId> {
        self.nodes.get(id).copied()
    }

    fn push(&mut self, command: DrawCommand) {
        let (object, node) = match self.current {
            Some((object, node)) => (Some(object), Some(node)),
            None => (None, None),
        };
        self.items.push(DrawItem { command, object, node });
    }

    fn paint(&mut self, path: BezPath, style: &ObjectStyle) {
        if let Some(color) = style.fill {
            self.push(DrawCommand::Fill {
                path: path.clone(),
                color,
            });
        }
        if let Some(color) = style.stroke {
            self.push(DrawCommand::Stroke {
                path,
                color,
                width: style.stroke_width,
            });
        }
    }
}

/// Outline path of an object.
fn object_path(object: &SceneObject) -> BezPath {
    match object {
        SceneObject::Player(p) => kurbo::Circle::new(p.position, p.radius).to_path(TOLERANCE),
        SceneObject::Ball(b) => kurbo::Circle::new(b.position, b.radius).to_path(TOLERANCE),
        SceneObject::Cone(c) => c.to_path(),
        SceneObject::Goal(g) => g.as_rect().to_path(TOLERANCE),
    }
}

impl ShapeRenderer for DisplayListRenderer {
    fn render_object(&mut self, object: &SceneObject, selected: bool) {
        let style = ObjectStyle::for_object(object);
        self.paint(object_path(object), &style);

        if selected {
            let bounds = object.bounds().inflate(SELECTION_MARGIN, SELECTION_MARGIN);
            let color = self.selection_color.unwrap_or_else(selection_color);
            self.push(DrawCommand::Stroke {
                path: bounds.to_path(TOLERANCE),
                color,
                width: 1.5,
            });
        }
    }

    fn render_pitch(&mut self, pitch: &PitchMarkings, color: Color) {
        for marking in pitch.iter() {
            let (path, width) = match *marking {
                Marking::Rect { rect, stroke_width } => (rect.to_path(TOLERANCE), stroke_width),
                Marking::Circle { circle, stroke_width } => (circle.to_path(TOLERANCE), stroke_width),
            };
            self.push(DrawCommand::Stroke { path, color, width });
        }
    }

    fn render_background_image(&mut self, image: &BackgroundImage, size: Size) {
        self.push(DrawCommand::Image {
            source: image.source.clone(),
            rect: Rect::from_origin_size(kurbo::Point::ZERO, size),
            opacity: image.opacity,
        });
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let background = ctx.background_image()?;
        self.items.clear();
        self.current = None;
        self.selection_color = Some(ctx.selection_color);

        self.push(DrawCommand::Fill {
            path: ctx.canvas.layout.bounds().to_path(TOLERANCE),
            color: ctx.background_color,
        });

        if let Some(image) = background {
            self.render_background_image(image, ctx.canvas_size());
        }

        if ctx.show_pitch {
            self.render_pitch(&ctx.canvas.pitch(), ctx.line_color);
        }

        let next_node = &mut self.next_node;
        self.nodes.sync(
            ctx.canvas.scene(),
            |_| {
                let node = NodeId(*next_node);
                *next_node += 1;
                node
            },
            |id, node| log::trace!("Unmounted {node:?} for object {id}"),
        );

        for object in ctx.objects() {
            let Some(node) = self.node_for(object.id()) else {
                continue;
            };
            self.current = Some((object.id(), node));
            let selected = ctx.canvas.is_selected(object.id());
            self.render_object(object, selected);
        }
        self.current = None;

        Ok(())
    }
}
