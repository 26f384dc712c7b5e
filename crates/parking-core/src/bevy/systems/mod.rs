//! Systems for the parking scene.
//!
//! Organized by functionality:
//! - scene: Object spawning and viewport layout
//! - input: Pointer routing into the session
//! - surface: Hit map refresh and surface command application
//! - playback: Per-frame playback driving
//! - rendering: Camera, sprites and trace gizmos
//! - window: Window cursor, button and resize forwarding

pub mod input;
pub mod playback;
pub mod rendering;
pub mod scene;
pub mod surface;
pub mod window;

pub use input::*;
pub use playback::*;
pub use rendering::*;
pub use scene::*;
pub use surface::*;
pub use window::*;
