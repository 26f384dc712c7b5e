//! Bevy integration for the parking scene.
//!
//! The core session runs unchanged inside a resource. Pointer input arrives
//! as messages, and what the session draws is queued and then applied to
//! entities by systems.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{BACKGROUND, DEFAULT_VIEWPORT, ParkingHeadlessPlugin, ParkingScenePlugin, ParkingSystems};
pub use resources::*;
