//! Bevy plugins for the parking scene.
//!
//! Provides:
//! - `ParkingHeadlessPlugin`: Logic-only plugin (no rendering/window dependencies) for headless testing
//! - `ParkingScenePlugin`: Full plugin including `ParkingHeadlessPlugin` + rendering and window input

use bevy::prelude::*;

use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::systems;
use crate::config::{ConfigError, SceneConfig};
use crate::layout::SceneLayout;
use crate::session::ParkingSession;

/// Viewport used until the first resize arrives.
pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Window background behind the backdrop sprite (`#555555`).
pub const BACKGROUND: Color = Color::srgb_u8(0x55, 0x55, 0x55);

/// Scene logic systems, chained in this order every frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingSystems;

fn prepare(config: &SceneConfig, viewport: Vec2) -> Result<(SceneLayout, ParkingSession), ConfigError> {
    config.validate()?;
    let layout = SceneLayout::compute(config, viewport.x, viewport.y);
    let session = ParkingSession::from_config(config, &layout)?;
    Ok((layout, session))
}

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin containing all scene logic without rendering or window dependencies.
///
/// Use this plugin in tests with `MinimalPlugins`; pointer input arrives as
/// [`PointerInput`] messages and resizes as [`ViewportResized`].
pub struct ParkingHeadlessPlugin {
    pub config: SceneConfig,
    pub viewport: Vec2,
}

impl Default for ParkingHeadlessPlugin {
    fn default() -> Self {
        Self {
            config: SceneConfig::default_scene(),
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl Plugin for ParkingHeadlessPlugin {
    fn build(&self, app: &mut App) {
        let (config, layout, session) = match prepare(&self.config, self.viewport) {
            Ok((layout, session)) => (self.config.clone(), layout, session),
            Err(err) => {
                tracing::error!("[parking] scene rejected, using the default scene: {}", err);
                let config = SceneConfig::default_scene();
                let (layout, session) =
                    prepare(&config, self.viewport).expect("default scene must be valid");
                (config, layout, session)
            }
        };

        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(SurfaceQueue::new(layout.hit_map().clone()))
            .insert_resource(ParkingState::new(session))
            .insert_resource(SceneLayoutRes(layout))
            .insert_resource(SceneConfigRes(config))
            .insert_resource(SceneEntities::default())
            .insert_resource(OverlayEntities::default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<PointerInput>()
            .add_message::<ViewportResized>();

        // ====================================================================
        // Systems
        // ====================================================================
        app.add_systems(Startup, systems::spawn_scene);
        app.add_systems(
            Update,
            (
                systems::handle_viewport_resized,
                systems::sync_hit_map,
                systems::route_pointer_input,
                systems::drive_playback,
                systems::apply_surface_commands,
            )
                .chain()
                .in_set(ParkingSystems),
        );
    }
}

// ============================================================================
// Scene Plugin (headless + rendering + window input)
// ============================================================================

/// Full plugin: scene logic plus camera, sprites, trace gizmos and window
/// input forwarding. Requires `DefaultPlugins`.
#[derive(Default)]
pub struct ParkingScenePlugin {
    pub config: SceneConfig,
}

impl ParkingScenePlugin {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ParkingScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ParkingHeadlessPlugin {
            config: self.config.clone(),
            viewport: DEFAULT_VIEWPORT,
        });
        app.insert_resource(ClearColor(BACKGROUND));

        app.add_systems(
            Startup,
            (systems::setup_camera, systems::fit_viewport_to_window),
        );
        app.add_systems(
            Update,
            (systems::emit_pointer_input, systems::forward_window_resized)
                .before(ParkingSystems),
        );
        app.add_systems(
            Update,
            (
                systems::attach_sprites,
                systems::configure_trace_gizmos,
                systems::render_trace_overlays,
            )
                .chain()
                .after(ParkingSystems),
        );
    }
}
