//! Raw pointer input routing.
//!
//! Hit-tests raw pointer events against the surface and turns them into the
//! session's down / enter / move / up callbacks.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::object::SceneObjectId;
use crate::session::ParkingSession;
use crate::surface::RenderSurface;

/// A raw pointer event in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: [f32; 2] },
    Move { position: [f32; 2] },
    Up { position: [f32; 2] },
}

impl PointerEvent {
    pub fn down(position: Vec2) -> Self {
        Self::Down {
            position: position.to_array(),
        }
    }

    pub fn moved(position: Vec2) -> Self {
        Self::Move {
            position: position.to_array(),
        }
    }

    pub fn up(position: Vec2) -> Self {
        Self::Up {
            position: position.to_array(),
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Self::Down { position } | Self::Move { position } | Self::Up { position } => {
                Vec2::from(*position)
            }
        }
    }
}

/// Tracks the hovered object to synthesize enter events.
#[derive(Debug, Default, Clone)]
pub struct PointerRouter {
    hovered: Option<SceneObjectId>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<SceneObjectId> {
        self.hovered
    }

    /// Dispatches one raw event to `session`.
    pub fn route<S: RenderSurface>(
        &mut self,
        session: &mut ParkingSession,
        surface: &mut S,
        event: PointerEvent,
    ) {
        let point = event.position();
        match event {
            PointerEvent::Down { .. } => {
                let hit = surface.hit_test(point);
                self.hovered = hit;
                if let Some(SceneObjectId::Car(car)) = hit {
                    session.pointer_down(surface, car, point);
                }
            }
            PointerEvent::Move { .. } => {
                let hit = surface.hit_test(point);
                if hit != self.hovered {
                    self.hovered = hit;
                    if let Some(target) = hit {
                        session.pointer_enter(surface, target);
                    }
                }
                session.pointer_move(surface, point);
            }
            PointerEvent::Up { .. } => session.pointer_up(surface),
        }
    }
}
