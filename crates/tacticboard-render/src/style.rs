//! Fixed visual styles for board objects.

use peniko::Color;
use tacticboard_core::shapes::{SceneObject, TeamColor};

/// Pitch surface (green).
pub fn pitch_color() -> Color {
    Color::from_rgba8(22, 163, 74, 255)
}

/// Pitch lines (white).
pub fn pitch_line_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

/// Selection highlight (blue).
pub fn selection_color() -> Color {
    Color::from_rgba8(59, 130, 246, 255)
}

fn team_fill(team: TeamColor) -> Color {
    match team {
        TeamColor::Blue => Color::from_rgba8(37, 99, 235, 255),
        TeamColor::Red => Color::from_rgba8(220, 38, 38, 255),
    }
}

fn outline() -> Color {
    Color::from_rgba8(17, 24, 39, 255)
}

/// How an object is painted.
#[derive(Debug, Clone, Copy)]
pub struct ObjectStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl ObjectStyle {
    /// Style for an object. Only team and goal colors vary per object.
    pub fn for_object(object: &SceneObject) -> Self {
        match object {
            SceneObject::Player(p) => Self {
                fill: Some(team_fill(p.color)),
                stroke: Some(pitch_line_color()),
                stroke_width: 2.0,
            },
            SceneObject::Ball(_) => Self {
                fill: Some(Color::from_rgba8(255, 255, 255, 255)),
                stroke: Some(outline()),
                stroke_width: 1.5,
            },
            SceneObject::Cone(_) => Self {
                fill: Some(Color::from_rgba8(249, 115, 22, 255)),
                stroke: Some(outline()),
                stroke_width: 1.0,
            },
            SceneObject::Goal(g) => Self {
                fill: None,
                stroke: Some(g.color.into()),
                stroke_width: 3.0,
            },
        }
    }
}
