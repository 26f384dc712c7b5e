//! ECS Messages for the parking scene.
//!
//! Input reaches the scene only through these messages, so headless tests
//! drive the exact same systems as a real window does.

use bevy::prelude::*;

use crate::input::PointerEvent;

/// A raw pointer event in scene space (logical pixels, y down).
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerInput(pub PointerEvent);

/// Message fired when the viewport changes size.
#[derive(Message, Debug, Clone, Copy)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
}
