//! ECS Resources for the parking scene.
//!
//! The session runs against [`SurfaceQueue`], which records what the core
//! asked for. Systems later apply the queued commands to entities.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::input::PointerRouter;
use crate::layout::SceneLayout;
use crate::object::{CarColor, Color as TraceColor, SceneObjectId};
use crate::session::ParkingSession;
use crate::surface::{HitMap, OverlayHandle, RenderSurface};

/// Scene configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfigRes(pub SceneConfig);

/// Current layout for the viewport.
#[derive(Resource, Debug, Clone)]
pub struct SceneLayoutRes(pub SceneLayout);

impl SceneLayoutRes {
    /// Scene space (top-left origin, y down) to world space (centered, y up).
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        let half = self.0.viewport() / 2.0;
        Vec2::new(point.x - half.x, half.y - point.y)
    }
}

/// The interaction session and its pointer router.
#[derive(Resource, Debug)]
pub struct ParkingState {
    pub session: ParkingSession,
    pub router: PointerRouter,
}

impl ParkingState {
    pub fn new(session: ParkingSession) -> Self {
        Self {
            session,
            router: PointerRouter::new(),
        }
    }
}

/// A deferred surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Place {
        car: CarColor,
        position: Vec2,
        rotation: f32,
    },
    Draw {
        handle: OverlayHandle,
        points: Vec<Vec2>,
        color: TraceColor,
        width: f32,
    },
    Remove(OverlayHandle),
}

/// [`RenderSurface`] backed by a command queue and a hit map.
#[derive(Resource, Debug, Default)]
pub struct SurfaceQueue {
    commands: Vec<SurfaceCommand>,
    hit_map: HitMap,
    next_handle: u64,
}

impl SurfaceQueue {
    pub fn new(hit_map: HitMap) -> Self {
        Self {
            hit_map,
            ..Self::default()
        }
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Takes every queued command in issue order.
    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for SurfaceQueue {
    fn place_object(&mut self, car: CarColor, position: Vec2, rotation: f32) {
        self.commands.push(SurfaceCommand::Place {
            car,
            position,
            rotation,
        });
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: TraceColor, width: f32) -> OverlayHandle {
        self.next_handle += 1;
        let handle = OverlayHandle(self.next_handle);
        self.commands.push(SurfaceCommand::Draw {
            handle,
            points: points.to_vec(),
            color,
            width,
        });
        handle
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) {
        self.commands.push(SurfaceCommand::Remove(handle));
    }

    fn hit_test(&self, point: Vec2) -> Option<SceneObjectId> {
        self.hit_map.topmost(point)
    }
}

/// Mapping from scene object ids to entities.
#[derive(Resource, Default, Debug)]
pub struct SceneEntities {
    pub map: HashMap<SceneObjectId, Entity>,
}

impl SceneEntities {
    pub fn insert(&mut self, id: SceneObjectId, entity: Entity) {
        self.map.insert(id, entity);
    }

    pub fn get(&self, id: SceneObjectId) -> Option<Entity> {
        self.map.get(&id).copied()
    }
}

/// Mapping from overlay handles to their trace entities.
#[derive(Resource, Default, Debug)]
pub struct OverlayEntities {
    pub map: HashMap<OverlayHandle, Entity>,
}
