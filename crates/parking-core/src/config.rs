//! Declarative scene description.
//!
//! A scene lists every interactive sprite with its offset in design units,
//! plus the tuning knobs of recording and playback. The default scene is
//! embedded from `scenes/default.json`.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::object::{CarColor, Color, ObstacleId, SceneObjectId};
use crate::playback::EasingType;
use crate::trace::TraceStyle;

/// Errors raised while loading a scene.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid trace color: '{0}'")]
    InvalidColor(String),

    #[error("scene is missing {0:?}")]
    MissingObject(SceneObjectId),

    #[error("{0:?} appears more than once")]
    DuplicateObject(SceneObjectId),

    #[error("throttle step must be at least 1")]
    ZeroThrottle,

    #[error("design size must be positive, got {0}")]
    InvalidDesignSize(f32),
}

/// Every object a scene must place.
pub const REQUIRED_OBJECTS: [SceneObjectId; 6] = [
    SceneObjectId::Slot(CarColor::Red),
    SceneObjectId::Slot(CarColor::Yellow),
    SceneObjectId::Obstacle(ObstacleId::Green),
    SceneObjectId::Obstacle(ObstacleId::Blue),
    SceneObjectId::Car(CarColor::Red),
    SceneObjectId::Car(CarColor::Yellow),
];

/// A sprite image and its native size in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpriteConfig {
    pub asset: String,
    pub size: [f32; 2],
}

/// One interactive object of the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectConfig {
    pub id: SceneObjectId,
    /// Offset from the scene center in design units, y up.
    pub offset: [f32; 2],
    #[serde(flatten)]
    pub sprite: SpriteConfig,
}

/// Trace line appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceConfig {
    pub width: f32,
    pub red: String,
    pub yellow: String,
}

/// Complete scene description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    /// Reference size the viewport's short side is compared against.
    pub design_size: f32,
    /// Sprite scale relative to the viewport scale.
    pub sprite_scale: f32,
    /// Upward shift of the whole scene as a fraction of the viewport height.
    pub lift_ratio: f32,
    /// Every n-th pointer move becomes a path point.
    pub throttle_step: u32,
    pub playback_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    pub trace: TraceConfig,
    pub backdrop: SpriteConfig,
    /// Objects in draw order; later objects are on top.
    pub objects: Vec<ObjectConfig>,
}

impl SceneConfig {
    /// Loads and validates a scene from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a scene from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the scene to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The two-car parking lot.
    /// Loaded from scenes/default.json at compile time.
    pub fn default_scene() -> Self {
        const DEFAULT_SCENE_JSON: &str = include_str!("../scenes/default.json");
        Self::from_json(DEFAULT_SCENE_JSON).expect("Failed to parse default scene JSON")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.throttle_step == 0 {
            return Err(ConfigError::ZeroThrottle);
        }
        if self.design_size.is_nan() || self.design_size <= 0.0 {
            return Err(ConfigError::InvalidDesignSize(self.design_size));
        }

        let mut seen = HashSet::new();
        for object in &self.objects {
            if !seen.insert(object.id) {
                return Err(ConfigError::DuplicateObject(object.id));
            }
        }
        if let Some(missing) = REQUIRED_OBJECTS.iter().find(|id| !seen.contains(*id)) {
            return Err(ConfigError::MissingObject(*missing));
        }

        self.trace_style()?;
        Ok(())
    }

    pub fn object(&self, id: SceneObjectId) -> Option<&ObjectConfig> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn trace_style(&self) -> Result<TraceStyle, ConfigError> {
        let parse = |hex: &String| {
            Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()))
        };
        Ok(TraceStyle {
            red: parse(&self.trace.red)?,
            yellow: parse(&self.trace.yellow)?,
            width: self.trace.width,
        })
    }

    pub fn playback_duration(&self) -> Duration {
        Duration::from_millis(self.playback_duration_ms)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::default_scene()
    }
}
