//! Scene object spawning and viewport layout.

use bevy::prelude::*;

use crate::bevy::{
    Backdrop, ParkingState, SceneConfigRes, SceneEntities, SceneLayoutRes, SceneSprite,
    SpriteSource, SurfaceQueue, ViewportResized,
};
use crate::layout::SceneLayout;
use crate::object::SceneObjectId;

fn sprite_transform(layout: &SceneLayoutRes, position: Vec2, rotation: f32, z: f32) -> Transform {
    let world = layout.to_world(position);
    Transform::from_xyz(world.x, world.y, z)
        .with_rotation(Quat::from_rotation_z(-rotation))
        .with_scale(Vec3::splat(layout.0.sprite_scale()))
}

/// Spawns the backdrop and every scene object in draw order.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<SceneConfigRes>,
    layout: Res<SceneLayoutRes>,
    state: Res<ParkingState>,
    mut entities: ResMut<SceneEntities>,
) {
    let backdrop = &config.0.backdrop;
    commands.spawn((
        Backdrop,
        SpriteSource {
            asset: backdrop.asset.clone(),
            size: Vec2::from(backdrop.size),
        },
        sprite_transform(&layout, layout.0.backdrop_center(), 0.0, 0.0),
    ));

    for (index, object) in config.0.objects.iter().enumerate() {
        let Some(region) = layout.0.region(object.id) else {
            tracing::warn!("[parking] no layout region for {:?}", object.id);
            continue;
        };
        let (position, rotation) = match object.id {
            SceneObjectId::Car(car) => {
                let tracked = state.session.car(car);
                (tracked.position, tracked.rotation)
            }
            _ => (region.center, 0.0),
        };

        #[allow(clippy::cast_precision_loss)]
        let z = (index + 1) as f32;
        let entity = commands
            .spawn((
                SceneSprite { id: object.id },
                SpriteSource {
                    asset: object.sprite.asset.clone(),
                    size: Vec2::from(object.sprite.size),
                },
                sprite_transform(&layout, position, rotation, z),
            ))
            .id();
        entities.insert(object.id, entity);
    }

    tracing::info!(
        "[parking] scene spawned: {} objects, viewport {:?}",
        config.0.objects.len(),
        layout.0.viewport()
    );
}

/// Recomputes the layout when the viewport changes size.
///
/// Static objects follow their new home spot. Cars keep their scene
/// position, which the session already moved for cars still at home.
pub fn handle_viewport_resized(
    mut reader: MessageReader<ViewportResized>,
    config: Res<SceneConfigRes>,
    mut layout: ResMut<SceneLayoutRes>,
    mut state: ResMut<ParkingState>,
    mut surface: ResMut<SurfaceQueue>,
    mut sprites: Query<(&SceneSprite, &mut Transform), Without<Backdrop>>,
    mut backdrop: Query<&mut Transform, With<Backdrop>>,
) {
    let Some(&ViewportResized { width, height }) = reader.read().last() else {
        return;
    };
    if width <= 0.0 || height <= 0.0 {
        tracing::debug!("[parking] ignoring empty viewport {}x{}", width, height);
        return;
    }
    if layout.0.viewport() == Vec2::new(width, height) {
        return;
    }

    layout.0 = SceneLayout::compute(&config.0, width, height);
    state.session.relayout(&mut *surface, &layout.0);

    let scale = Vec3::splat(layout.0.sprite_scale());
    for (sprite, mut transform) in &mut sprites {
        let position = match sprite.id {
            SceneObjectId::Car(car) => state.session.car(car).position,
            id => match layout.0.region(id) {
                Some(region) => region.center,
                None => continue,
            },
        };
        let world = layout.to_world(position);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        transform.scale = scale;
    }
    for mut transform in &mut backdrop {
        let world = layout.to_world(layout.0.backdrop_center());
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        transform.scale = scale;
    }

    tracing::info!("[parking] viewport resized to {}x{}", width, height);
}
