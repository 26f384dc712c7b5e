//! Parking Path Core Library
//!
//! Drag-to-park path capture and playback for a two-car parking scene.
//!
//! The interaction logic (recording, cancellation, arrival, eased playback)
//! lives in plain modules that draw through the [`surface::RenderSurface`]
//! trait. The `bevy` module runs the same session inside a Bevy app.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod input;
pub mod layout;
pub mod object;
pub mod playback;
pub mod policy;
pub mod recorder;
pub mod sampler;
pub mod session;
pub mod surface;
pub mod trace;

// Bevy integration
pub mod bevy;

pub use config::{ConfigError, SceneConfig};
pub use input::{PointerEvent, PointerRouter};
pub use layout::SceneLayout;
pub use object::{CarColor, Color, ObstacleId, SceneObjectId, TrackedObject, Zone};
pub use playback::{AnimationSpec, EasingType, Playback, PlaybackAnimator};
pub use policy::{DragCorridor, EnterReaction};
pub use recorder::{FinalizedPath, PathId, PathRecorder, RecorderError, RecordingState};
pub use sampler::CoordinateSampler;
pub use session::{ParkingSession, SessionSettings};
pub use surface::{HitMap, HitRegion, OverlayHandle, RenderSurface};
pub use trace::{TraceRenderer, TraceStyle};
