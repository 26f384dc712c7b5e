//! ECS Components for the parking scene.

use bevy::prelude::*;

use crate::object::{Color as TraceColor, SceneObjectId};
use crate::surface::OverlayHandle;

/// Marker for the main 2D camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// An interactive scene object (car, slot or obstacle).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSprite {
    pub id: SceneObjectId,
}

/// Marker for the parking lot backdrop.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Backdrop;

/// Image and native size of a sprite, resolved into a `Sprite` once an
/// asset server is available.
#[derive(Component, Debug, Clone)]
pub struct SpriteSource {
    pub asset: String,
    pub size: Vec2,
}

/// A trace polyline drawn for an open recording.
#[derive(Component, Debug, Clone)]
pub struct TraceOverlay {
    pub handle: OverlayHandle,
    /// World-space points.
    pub points: Vec<Vec2>,
    pub color: TraceColor,
    pub width: f32,
}

impl From<TraceColor> for Color {
    fn from(c: TraceColor) -> Self {
        Color::srgba_u8(c.r, c.g, c.b, c.a)
    }
}
