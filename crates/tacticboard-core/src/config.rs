//! Board configuration.

use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default upper bound for the canvas width in pixels.
pub const DEFAULT_MAX_CANVAS_WIDTH: f64 = 1000.0;

/// Default width:height ratio of the canvas.
pub const DEFAULT_ASPECT_RATIO: f64 = 2.0;

/// Default pitch length in metres (futsal).
pub const DEFAULT_PITCH_LENGTH: f64 = 40.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Real-world object sizes in metres.
///
/// Pixel geometry is these values multiplied by the canvas scale at the
/// moment an object is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectSizes {
    pub player_radius: f64,
    pub ball_radius: f64,
    pub cone_radius: f64,
    pub goal_width: f64,
    pub goal_height: f64,
}

impl Default for ObjectSizes {
    fn default() -> Self {
        Self {
            player_radius: 0.3,
            ball_radius: 0.11,
            cone_radius: 0.2,
            goal_width: 0.8,
            goal_height: 3.0,
        }
    }
}

/// Settings that shape the board: canvas sizing and object geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Canvas width never exceeds this, whatever the container offers.
    pub max_canvas_width: f64,
    /// Width divided by height.
    pub aspect_ratio: f64,
    /// Pitch length in metres, mapped onto the full canvas width.
    pub pitch_length: f64,
    /// Object size table.
    pub sizes: ObjectSizes,
    /// Frame color for new goals.
    pub goal_color: SerializableColor,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_canvas_width: DEFAULT_MAX_CANVAS_WIDTH,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            pitch_length: DEFAULT_PITCH_LENGTH,
            sizes: ObjectSizes::default(),
            goal_color: SerializableColor::white(),
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Reject dimensions that would produce a degenerate canvas or objects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = &self.sizes;
        let positive = [
            ("max_canvas_width", self.max_canvas_width),
            ("aspect_ratio", self.aspect_ratio),
            ("pitch_length", self.pitch_length),
            ("sizes.player_radius", sizes.player_radius),
            ("sizes.ball_radius", sizes.ball_radius),
            ("sizes.cone_radius", sizes.cone_radius),
            ("sizes.goal_width", sizes.goal_width),
            ("sizes.goal_height", sizes.goal_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert!((config.aspect_ratio - 2.0).abs() < f64::EPSILON);
        assert!((config.sizes.player_radius - 0.3).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = BoardConfig::from_json(r#"{"max_canvas_width": 800, "sizes": {"ball_radius": 0.2}}"#).unwrap();
        assert!((config.max_canvas_width - 800.0).abs() < f64::EPSILON);
        assert!((config.sizes.ball_radius - 0.2).abs() < f64::EPSILON);
        assert!((config.sizes.player_radius - 0.3).abs() < f64::EPSILON);
        assert!((config.pitch_length - DEFAULT_PITCH_LENGTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(BoardConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_zero_aspect_ratio() {
        let result = BoardConfig::from_json(r#"{"aspect_ratio": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "aspect_ratio", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_object_sizes() {
        let result = BoardConfig::from_json(r#"{"sizes": {"player_radius": -1}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "sizes.player_radius", .. })
        ));

        let mut config = BoardConfig::default();
        config.sizes.goal_width = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "sizes.goal_width", .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = BoardConfig::load(Path::new("/nonexistent/board.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
