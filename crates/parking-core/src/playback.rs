//! Playback of finalized paths.
//!
//! A finalized path becomes an [`AnimationSpec`]: the car's pose before the
//! animation followed by one pose per path point. Playback runs the eased
//! progress through the whole pose list, so every segment gets an equal
//! share of the duration regardless of its length.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::object::{CarColor, TrackedObject};
use crate::recorder::{FinalizedPath, PathId};

/// Default playback duration.
pub const DEFAULT_PLAYBACK_DURATION: Duration = Duration::from_millis(3000);

/// Easing curve for playback progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    QuadraticIn,
    QuadraticOut,
    #[default]
    QuadraticInOut,
}

impl EasingType {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Heading of travel from `from` to `to`, as `atan2(dx, dy)`.
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.x.atan2(d.y)
}

/// Poses derived from one finalized path.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    positions: Vec<Vec2>,
    rotations: Vec<f32>,
}

impl AnimationSpec {
    /// Builds the pose list starting from the car's current pose.
    pub fn from_path(start: Vec2, start_rotation: f32, path: &[Vec2]) -> Self {
        let mut positions = Vec::with_capacity(path.len() + 1);
        let mut rotations = Vec::with_capacity(path.len() + 1);
        positions.push(start);
        rotations.push(start_rotation);

        let mut previous = start;
        for &point in path {
            positions.push(point);
            rotations.push(heading(previous, point));
            previous = point;
        }

        Self {
            positions,
            rotations,
        }
    }

    /// Target positions, one per path point.
    pub fn waypoints(&self) -> &[Vec2] {
        &self.positions[1..]
    }

    /// Target rotations, one per path point.
    pub fn rotations(&self) -> &[f32] {
        &self.rotations[1..]
    }

    /// Pose at eased progress `k` in `[0, 1]`.
    pub fn sample(&self, k: f32) -> (Vec2, f32) {
        (
            interpolate(&self.positions, k, Vec2::lerp),
            interpolate(&self.rotations, k, |a, b, t| a + (b - a) * t),
        )
    }

    pub fn final_pose(&self) -> (Vec2, f32) {
        self.sample(1.0)
    }
}

/// Piecewise-linear interpolation over evenly spaced values.
fn interpolate<T: Copy>(values: &[T], k: f32, lerp: impl Fn(T, T, f32) -> T) -> T {
    let last = values.len() - 1;
    if last == 0 {
        return values[0];
    }
    #[allow(clippy::cast_precision_loss)]
    let f = last as f32 * k.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let i = f.floor() as usize;
    if i >= last {
        return values[last];
    }
    #[allow(clippy::cast_precision_loss)]
    let t = f - i as f32;
    lerp(values[i], values[i + 1], t)
}

/// One car's running animation.
#[derive(Debug, Clone)]
pub struct Playback {
    path_id: PathId,
    spec: AnimationSpec,
    duration: Duration,
    easing: EasingType,
    started_at: Option<Duration>,
    finished: bool,
}

impl Playback {
    pub fn new(path_id: PathId, spec: AnimationSpec, duration: Duration, easing: EasingType) -> Self {
        Self {
            path_id,
            spec,
            duration,
            easing,
            started_at: None,
            finished: false,
        }
    }

    pub fn path_id(&self) -> PathId {
        self.path_id
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances to `now` and returns the pose to show.
    ///
    /// The first call latches the start time.
    pub fn advance(&mut self, now: Duration) -> (Vec2, f32) {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            self.finished = true;
            return self.spec.final_pose();
        }
        self.spec.sample(self.easing.apply(t))
    }
}

/// Runs one playback per car.
#[derive(Debug)]
pub struct PlaybackAnimator {
    duration: Duration,
    easing: EasingType,
    active: BTreeMap<CarColor, Playback>,
    started: HashMap<CarColor, PathId>,
}

impl PlaybackAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            duration,
            easing,
            active: BTreeMap::new(),
            started: HashMap::new(),
        }
    }

    /// Starts playing `path` for `object`.
    ///
    /// Returns `false` when this path was already started. A newer path
    /// for the same car replaces the running playback.
    pub fn start(&mut self, object: &TrackedObject, path: &FinalizedPath) -> bool {
        let car = object.id();
        if self.started.get(&car) == Some(&path.id) {
            tracing::debug!("[playback] {:?} path {:?} already started", car, path.id);
            return false;
        }
        self.started.insert(car, path.id);

        let spec = AnimationSpec::from_path(object.position, object.rotation, &path.points);
        tracing::info!(
            "[playback] {:?} starts along {} waypoints",
            car,
            spec.waypoints().len()
        );
        self.active
            .insert(car, Playback::new(path.id, spec, self.duration, self.easing));
        true
    }

    pub fn playback(&self, car: CarColor) -> Option<&Playback> {
        self.active.get(&car)
    }

    pub fn is_active(&self, car: CarColor) -> bool {
        self.active.contains_key(&car)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Advances every playback and returns the poses to apply.
    ///
    /// Finished playbacks report their final pose once and are dropped.
    pub fn advance(&mut self, now: Duration) -> Vec<(CarColor, Vec2, f32)> {
        let mut poses = Vec::with_capacity(self.active.len());
        for (&car, playback) in &mut self.active {
            let (position, rotation) = playback.advance(now);
            poses.push((car, position, rotation));
        }
        self.active.retain(|car, playback| {
            if playback.is_finished() {
                tracing::info!("[playback] {:?} finished", car);
            }
            !playback.is_finished()
        });
        poses
    }
}

impl Default for PlaybackAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYBACK_DURATION, EasingType::default())
    }
}
