//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `ParkingHeadlessPlugin` with a fixed frame time, so
//! the scene can be driven without a window or renderer.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::bevy::events::{PointerInput, ViewportResized};
use crate::bevy::plugin::ParkingHeadlessPlugin;
use crate::bevy::resources::{ParkingState, SceneEntities, SceneLayoutRes};
use crate::bevy::TraceOverlay;
use crate::config::SceneConfig;
use crate::input::PointerEvent;
use crate::layout::SceneLayout;
use crate::object::SceneObjectId;

/// Time advanced by every update.
pub const FRAME: Duration = Duration::from_millis(100);

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Default scene in a square 1024x1024 viewport.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default_scene(), Vec2::new(1024.0, 1024.0))
    }

    pub fn with_config(config: SceneConfig, viewport: Vec2) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ParkingHeadlessPlugin { config, viewport });
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        // Run one update to run startup systems
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Runs enough frames to cover `duration`.
    pub fn run_for(&mut self, duration: Duration) {
        let frames = duration.as_millis().div_ceil(FRAME.as_millis());
        for _ in 0..frames {
            self.update();
        }
    }

    /// Writes one pointer event and runs a frame.
    pub fn send(&mut self, event: PointerEvent) {
        self.app.world_mut().write_message(PointerInput(event));
        self.update();
    }

    /// Moves in `steps` straight increments from `from` to `to`, all
    /// delivered in a single frame.
    pub fn drag(&mut self, from: Vec2, to: Vec2, steps: u32) {
        for i in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / steps as f32;
            self.app
                .world_mut()
                .write_message(PointerInput(PointerEvent::moved(from.lerp(to, t))));
        }
        self.update();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.app
            .world_mut()
            .write_message(ViewportResized { width, height });
        self.update();
    }

    pub fn state(&self) -> &ParkingState {
        self.app.world().resource::<ParkingState>()
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.app.world().resource::<SceneLayoutRes>().0
    }

    pub fn to_world(&self, point: Vec2) -> Vec2 {
        self.app.world().resource::<SceneLayoutRes>().to_world(point)
    }

    /// Home center of `id` in the current layout.
    pub fn center(&self, id: SceneObjectId) -> Vec2 {
        self.layout().region(id).map(|r| r.center).unwrap_or_default()
    }

    pub fn transform(&self, id: SceneObjectId) -> Transform {
        let entity = self
            .app
            .world()
            .resource::<SceneEntities>()
            .get(id)
            .expect("object should be spawned");
        *self.app.world().get::<Transform>(entity).expect("object should have a transform")
    }

    pub fn trace_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&TraceOverlay>().iter(world).count()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
