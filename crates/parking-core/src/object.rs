//! Scene object identities and the trackable cars.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Trace color of the red car.
    pub const RED_TRACE: Color = Color::rgb(0xbb, 0x29, 0x19);
    /// Trace color of the yellow car.
    pub const YELLOW_TRACE: Color = Color::rgb(0xd2, 0xbb, 0x44);

    /// Parses `rrggbb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Identity of a draggable car. Each car has exactly one parking slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarColor {
    Red,
    Yellow,
}

impl CarColor {
    pub const ALL: [CarColor; 2] = [CarColor::Red, CarColor::Yellow];

    /// The other trackable car.
    pub fn other(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }

    /// The zone this car has to reach.
    pub fn slot(self) -> SceneObjectId {
        SceneObjectId::Slot(self)
    }
}

/// The stationary cars parked around the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleId {
    Green,
    Blue,
}

/// Anything the pointer can hover in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SceneObjectId {
    /// A trackable car.
    Car(CarColor),
    /// The parking slot that finalizes the matching car's path.
    Slot(CarColor),
    /// A stationary car; crossing it abandons every recording.
    Obstacle(ObstacleId),
}

/// Static target region of one car. Read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub owner: CarColor,
}

impl Zone {
    pub fn id(&self) -> SceneObjectId {
        self.owner.slot()
    }
}

/// A draggable car with the pose the surface currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    id: CarColor,
    pub position: Vec2,
    pub rotation: f32,
    zone: Zone,
}

impl TrackedObject {
    pub fn new(id: CarColor, position: Vec2, rotation: f32) -> Self {
        Self {
            id,
            position,
            rotation,
            zone: Zone { owner: id },
        }
    }

    pub fn id(&self) -> CarColor {
        self.id
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }
}
