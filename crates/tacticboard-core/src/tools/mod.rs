//! Tool system for the board.

use crate::config::BoardConfig;
use crate::shapes::{Ball, Cone, Goal, IdAllocator, ObjectId, Player, SceneObject, TeamColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available placement tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    PlayerBlue,
    PlayerRed,
    Ball,
    Cone,
    SimpleGoal,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::PlayerBlue,
        ToolKind::PlayerRed,
        ToolKind::Ball,
        ToolKind::Cone,
        ToolKind::SimpleGoal,
    ];

    /// Stable identifier used in scripts and configuration.
    pub fn identifier(self) -> &'static str {
        match self {
            ToolKind::PlayerBlue => "player-blue",
            ToolKind::PlayerRed => "player-red",
            ToolKind::Ball => "ball",
            ToolKind::Cone => "cone",
            ToolKind::SimpleGoal => "simple-goal",
        }
    }

    /// Parse an identifier; anything unrecognized means "no tool".
    pub fn parse(identifier: &str) -> Option<Self> {
        identifier.parse().ok()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when a tool identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.identifier() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Holds the active tool. Owned by the UI layer, not by history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolManager {
    /// Currently selected tool, if any.
    pub current_tool: Option<ToolKind>,
}

impl ToolManager {
    /// Create a new tool manager with no tool selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool (or deselect with `None`).
    pub fn set_tool(&mut self, tool: Option<ToolKind>) {
        self.current_tool = tool;
    }
}

/// Build a new object for `tool` at `point`.
///
/// Geometry is the configured real-world size multiplied by `scale`
/// (pixels per metre). Returns `None`, without consuming an id, when there
/// is no tool, no point, or the point or resulting geometry is not finite.
/// Also returns `None` once `ids` has run out.
pub fn create_object(
    tool: Option<ToolKind>,
    point: Option<Point>,
    scale: f64,
    config: &BoardConfig,
    ids: &mut IdAllocator,
) -> Option<SceneObject> {
    let tool = tool?;
    let point = point?;
    if !point.is_finite() || !scale.is_finite() {
        log::warn!("Ignoring {tool} placement at non-finite point {point:?} (scale {scale})");
        return None;
    }

    let sizes = &config.sizes;
    let build = |id: ObjectId| match tool {
        ToolKind::PlayerBlue => {
            SceneObject::Player(Player::new(id, point, TeamColor::Blue, sizes.player_radius * scale))
        }
        ToolKind::PlayerRed => {
            SceneObject::Player(Player::new(id, point, TeamColor::Red, sizes.player_radius * scale))
        }
        ToolKind::Ball => SceneObject::Ball(Ball::new(id, point, sizes.ball_radius * scale)),
        ToolKind::Cone => SceneObject::Cone(Cone::new(id, point, sizes.cone_radius * scale)),
        ToolKind::SimpleGoal => SceneObject::Goal(Goal::new(
            id,
            point,
            sizes.goal_width * scale,
            sizes.goal_height * scale,
            config.goal_color,
        )),
    };

    // Check geometry before taking an id.
    if !build(ObjectId(0)).is_finite() {
        log::warn!("Ignoring {tool} placement: configured size is not finite");
        return None;
    }
    let Some(id) = ids.allocate() else {
        log::warn!("Ignoring {tool} placement: object ids exhausted");
        return None;
    };
    Some(build(id))
}
