//! Drag-to-park interaction session.
//!
//! Owns both cars, their recordings, traces and playbacks, and reacts to
//! pointer events. Every anomaly (a second `begin`, a finalize with nothing
//! recorded, a repeated playback start) is a logged no-op.

use std::collections::HashSet;
use std::time::Duration;

use bevy::math::Vec2;

use crate::config::{ConfigError, SceneConfig};
use crate::layout::SceneLayout;
use crate::object::{CarColor, SceneObjectId, TrackedObject};
use crate::playback::{EasingType, PlaybackAnimator};
use crate::policy::{DragCorridor, EnterReaction, enter_reactions};
use crate::recorder::{PathRecorder, RecordingState};
use crate::sampler::CoordinateSampler;
use crate::surface::RenderSurface;
use crate::trace::{TraceRenderer, TraceStyle};

/// Tuning for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub throttle_step: u32,
    pub trace: TraceStyle,
    pub playback_duration: Duration,
    pub easing: EasingType,
    pub corridor: DragCorridor,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            throttle_step: crate::sampler::DEFAULT_THROTTLE_STEP,
            trace: TraceStyle::default(),
            playback_duration: crate::playback::DEFAULT_PLAYBACK_DURATION,
            easing: EasingType::default(),
            corridor: DragCorridor::UNBOUNDED,
        }
    }
}

/// Path capture and playback for the two cars.
#[derive(Debug)]
pub struct ParkingSession {
    red: TrackedObject,
    yellow: TrackedObject,
    sampler: CoordinateSampler,
    recorder: PathRecorder,
    trace: TraceRenderer,
    animator: PlaybackAnimator,
    corridor: DragCorridor,
    /// Cars that left their home spot through playback.
    driven: HashSet<CarColor>,
}

impl ParkingSession {
    pub fn new(red: Vec2, yellow: Vec2, settings: SessionSettings) -> Self {
        Self {
            red: TrackedObject::new(CarColor::Red, red, 0.0),
            yellow: TrackedObject::new(CarColor::Yellow, yellow, 0.0),
            sampler: CoordinateSampler::new(settings.throttle_step),
            recorder: PathRecorder::new(),
            trace: TraceRenderer::new(settings.trace),
            animator: PlaybackAnimator::new(settings.playback_duration, settings.easing),
            corridor: settings.corridor,
            driven: HashSet::new(),
        }
    }

    /// Builds a session with cars at their home spots in `layout`.
    pub fn from_config(config: &SceneConfig, layout: &SceneLayout) -> Result<Self, ConfigError> {
        let home = |car| {
            layout
                .home(car)
                .ok_or(ConfigError::MissingObject(SceneObjectId::Car(car)))
        };
        let settings = SessionSettings {
            throttle_step: config.throttle_step,
            trace: config.trace_style()?,
            playback_duration: config.playback_duration(),
            easing: config.easing,
            corridor: layout.corridor(),
        };
        Ok(Self::new(home(CarColor::Red)?, home(CarColor::Yellow)?, settings))
    }

    pub fn car(&self, car: CarColor) -> &TrackedObject {
        match car {
            CarColor::Red => &self.red,
            CarColor::Yellow => &self.yellow,
        }
    }

    fn car_mut(&mut self, car: CarColor) -> &mut TrackedObject {
        match car {
            CarColor::Red => &mut self.red,
            CarColor::Yellow => &mut self.yellow,
        }
    }

    pub fn recording(&self, car: CarColor) -> &RecordingState {
        self.recorder.state(car)
    }

    pub fn trace(&self) -> &TraceRenderer {
        &self.trace
    }

    pub fn animator(&self) -> &PlaybackAnimator {
        &self.animator
    }

    pub fn corridor(&self) -> DragCorridor {
        self.corridor
    }

    /// Pointer pressed on `car`: start recording from `point`.
    pub fn pointer_down<S: RenderSurface>(&mut self, surface: &mut S, car: CarColor, point: Vec2) {
        match self.recorder.begin(car, point) {
            Ok(()) => {
                tracing::debug!("[session] {:?} begins recording at {:?}", car, point);
                self.trace.redraw(surface, car, self.recorder.state(car).points());
            }
            Err(err) => tracing::debug!("[session] ignored pointer down: {}", err),
        }
    }

    /// Pointer entered `target`'s hover region.
    pub fn pointer_enter<S: RenderSurface>(&mut self, surface: &mut S, target: SceneObjectId) {
        for reaction in enter_reactions(target) {
            match reaction {
                EnterReaction::Cancel(car) => self.cancel(surface, car),
                EnterReaction::Arrive(car) => self.arrive(surface, car),
            }
        }
    }

    /// Raw pointer move. Every recording car advances the shared counter,
    /// then the corridor is checked before a sampled point is recorded.
    pub fn pointer_move<S: RenderSurface>(&mut self, surface: &mut S, point: Vec2) {
        for car in CarColor::ALL {
            if !self.recorder.is_recording(car) {
                continue;
            }
            let sampled = self.sampler.accept();
            if !self.corridor.contains(point.y) {
                tracing::debug!("[session] {:?} left the drag corridor at y={}", car, point.y);
                self.cancel(surface, car);
                continue;
            }
            if !sampled {
                continue;
            }
            if let Some(path) = self.recorder.append(car, point) {
                self.trace.redraw(surface, car, path);
            }
        }
    }

    /// Pointer released: any recording that has not arrived is abandoned.
    pub fn pointer_up<S: RenderSurface>(&mut self, surface: &mut S) {
        for car in CarColor::ALL {
            self.cancel(surface, car);
        }
    }

    /// Per-frame step: advances every playback to `now`.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S, now: Duration) {
        for (car, position, rotation) in self.animator.advance(now) {
            let object = self.car_mut(car);
            object.position = position;
            object.rotation = rotation;
            surface.place_object(car, position, rotation);
        }
    }

    /// Re-fits the session to a new layout.
    ///
    /// Open recordings are abandoned since their points belong to the old
    /// layout. Cars still at home move to their new home spot.
    pub fn relayout<S: RenderSurface>(&mut self, surface: &mut S, layout: &SceneLayout) {
        self.corridor = layout.corridor();
        for car in CarColor::ALL {
            self.cancel(surface, car);
            if self.driven.contains(&car) {
                continue;
            }
            if let Some(home) = layout.home(car) {
                let object = self.car_mut(car);
                object.position = home;
                surface.place_object(car, home, object.rotation);
            }
        }
    }

    /// Clears `car`'s open recording and its trace.
    fn cancel<S: RenderSurface>(&mut self, surface: &mut S, car: CarColor) {
        if self.recorder.clear(car) {
            tracing::debug!("[session] {:?} recording cancelled", car);
            self.trace.remove(surface, car);
        }
    }

    /// `car` reached its slot: finalize the recording and queue playback.
    fn arrive<S: RenderSurface>(&mut self, surface: &mut S, car: CarColor) {
        if !self.recorder.is_recording(car) {
            return;
        }
        match self.recorder.finalize(car) {
            Ok(path) => {
                self.trace.remove(surface, car);
                let object = match car {
                    CarColor::Red => &self.red,
                    CarColor::Yellow => &self.yellow,
                };
                tracing::info!(
                    "[session] {:?} reached {:?} with {} points",
                    car,
                    object.zone().id(),
                    path.points.len()
                );
                if self.animator.start(object, &path) {
                    self.driven.insert(car);
                }
            }
            Err(err) => tracing::debug!("[session] ignored arrival: {}", err),
        }
    }
}
