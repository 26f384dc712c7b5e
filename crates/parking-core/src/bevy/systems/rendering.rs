//! Camera, sprite and trace rendering.
//!
//! Only added by the windowed scene plugin; headless apps have no asset
//! server or gizmo pipeline.

use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore, GizmoLineJoint};
use bevy::prelude::*;

use crate::bevy::{MainCamera, SpriteSource, TraceOverlay};

/// Spawns the 2D camera. World units equal logical pixels.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
    tracing::info!("[parking] camera spawned");
}

/// Resolves new [`SpriteSource`]s into sprites.
pub fn attach_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    added: Query<(Entity, &SpriteSource), Added<SpriteSource>>,
) {
    for (entity, source) in &added {
        let mut sprite = Sprite::from_image(asset_server.load(source.asset.clone()));
        sprite.custom_size = Some(source.size);
        commands.entity(entity).insert(sprite);
    }
}

/// Matches the gizmo line width to newly drawn traces.
pub fn configure_trace_gizmos(
    mut store: ResMut<GizmoConfigStore>,
    added: Query<&TraceOverlay, Added<TraceOverlay>>,
) {
    let Some(overlay) = added.iter().last() else {
        return;
    };
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = overlay.width;
    config.line.joints = GizmoLineJoint::Round(8);
}

/// System to render trace overlays using gizmos.
pub fn render_trace_overlays(mut gizmos: Gizmos, overlays: Query<&TraceOverlay>) {
    for overlay in &overlays {
        gizmos.linestrip_2d(overlay.points.iter().copied(), Color::from(overlay.color));
    }
}
