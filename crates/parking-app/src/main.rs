//! Windowed drag-to-park scene.
//!
//! Usage: `parking-app [scene.json]`. Without an argument, or when the file
//! cannot be loaded, the embedded default scene is used.

use bevy::prelude::*;
use parking_core::SceneConfig;
use parking_core::bevy::ParkingScenePlugin;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn load_scene(path: Option<String>) -> SceneConfig {
    let Some(path) = path else {
        tracing::info!("[parking] using the default scene");
        return SceneConfig::default_scene();
    };
    match SceneConfig::from_file(&path) {
        Ok(config) => {
            tracing::info!("[parking] loaded scene from {}", path);
            config
        }
        Err(err) => {
            tracing::error!("[parking] failed to load {}: {}; using the default scene", path, err);
            SceneConfig::default_scene()
        }
    }
}

fn main() -> AppExit {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,wgpu=error,naga=warn")),
        )
        .init();

    let config = load_scene(std::env::args().nth(1));

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Parking".to_string(),
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                // Scene asset paths are relative to the working directory.
                file_path: ".".to_string(),
                ..default()
            })
            .disable::<bevy::log::LogPlugin>(),
    );

    tracing::info!("[parking] adding ParkingScenePlugin");
    app.add_plugins(ParkingScenePlugin::new(config));

    app.run()
}
