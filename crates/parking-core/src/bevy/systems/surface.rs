//! Hit map refresh and surface command application.
//!
//! The session only talks to [`SurfaceQueue`]. These systems keep the
//! queue's hit map in sync with the cars and turn queued commands into
//! transform updates and trace entities.

use bevy::prelude::*;

use crate::bevy::{
    OverlayEntities, ParkingState, SceneEntities, SceneLayoutRes, SceneSprite, SurfaceCommand,
    SurfaceQueue, TraceOverlay,
};
use crate::object::{CarColor, SceneObjectId};
use crate::surface::HitRegion;

/// Rebuilds the hit map from the layout, with cars at their current pose.
pub fn sync_hit_map(
    state: Res<ParkingState>,
    layout: Res<SceneLayoutRes>,
    mut surface: ResMut<SurfaceQueue>,
) {
    let mut hit_map = layout.0.hit_map().clone();
    for car in CarColor::ALL {
        let Some(region) = hit_map.get(SceneObjectId::Car(car)).copied() else {
            continue;
        };
        let tracked = state.session.car(car);
        hit_map.upsert(HitRegion {
            center: tracked.position,
            rotation: tracked.rotation,
            ..region
        });
    }
    surface.set_hit_map(hit_map);
}

/// Applies queued surface commands.
pub fn apply_surface_commands(
    mut commands: Commands,
    mut surface: ResMut<SurfaceQueue>,
    layout: Res<SceneLayoutRes>,
    entities: Res<SceneEntities>,
    mut overlays: ResMut<OverlayEntities>,
    mut transforms: Query<&mut Transform, With<SceneSprite>>,
) {
    if surface.is_empty() {
        return;
    }

    for command in surface.drain() {
        match command {
            SurfaceCommand::Place {
                car,
                position,
                rotation,
            } => {
                let Some(entity) = entities.get(SceneObjectId::Car(car)) else {
                    tracing::warn!("[parking] no entity for {:?} car", car);
                    continue;
                };
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    let world = layout.to_world(position);
                    transform.translation.x = world.x;
                    transform.translation.y = world.y;
                    // Scene rotation is clockwise with y down.
                    transform.rotation = Quat::from_rotation_z(-rotation);
                }
            }
            SurfaceCommand::Draw {
                handle,
                points,
                color,
                width,
            } => {
                let points = points.into_iter().map(|p| layout.to_world(p)).collect();
                let entity = commands
                    .spawn(TraceOverlay {
                        handle,
                        points,
                        color,
                        width,
                    })
                    .id();
                overlays.map.insert(handle, entity);
            }
            SurfaceCommand::Remove(handle) => {
                if let Some(entity) = overlays.map.remove(&handle) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
