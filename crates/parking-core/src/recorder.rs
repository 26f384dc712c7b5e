//! Per-car path recording state machine.
//!
//! Each car is `Idle`, `Recording` an open path, or `Finalized` with a frozen
//! path waiting for (or consumed by) playback. Cancelling returns to `Idle`.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::math::Vec2;

use crate::object::CarColor;

/// Identity of a finalized path, unique for the recorder's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(u64);

/// Errors returned by recorder operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecorderError {
    #[error("{0:?} is already recording a path")]
    AlreadyRecording(CarColor),
    #[error("{0:?} has no open path")]
    NotRecording(CarColor),
    #[error("{0:?} path has no points")]
    EmptyPath(CarColor),
}

/// A frozen path handed over to playback.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedPath {
    pub id: PathId,
    pub owner: CarColor,
    pub points: Arc<[Vec2]>,
}

/// Recording state of one car.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording(Vec<Vec2>),
    Finalized(FinalizedPath),
}

impl RecordingState {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording(_))
    }

    /// Points of the open or finalized path; empty when idle.
    pub fn points(&self) -> &[Vec2] {
        match self {
            Self::Idle => &[],
            Self::Recording(points) => points,
            Self::Finalized(path) => &path.points,
        }
    }
}

/// Owns one path buffer per car.
#[derive(Debug, Default)]
pub struct PathRecorder {
    states: HashMap<CarColor, RecordingState>,
    next_id: u64,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, car: CarColor) -> &RecordingState {
        const IDLE: &RecordingState = &RecordingState::Idle;
        self.states.get(&car).unwrap_or(IDLE)
    }

    pub fn is_recording(&self, car: CarColor) -> bool {
        self.state(car).is_recording()
    }

    /// Opens a new path starting at `start`.
    pub fn begin(&mut self, car: CarColor, start: Vec2) -> Result<(), RecorderError> {
        let state = self.states.entry(car).or_default();
        if state.is_recording() {
            return Err(RecorderError::AlreadyRecording(car));
        }
        *state = RecordingState::Recording(vec![start]);
        Ok(())
    }

    /// Appends to the open path and returns it for redrawing.
    ///
    /// Returns `None` when the car has no open path.
    pub fn append(&mut self, car: CarColor, point: Vec2) -> Option<&[Vec2]> {
        match self.states.get_mut(&car) {
            Some(RecordingState::Recording(points)) => {
                points.push(point);
                Some(points.as_slice())
            }
            _ => None,
        }
    }

    /// Discards the open path. Returns whether anything was discarded.
    pub fn clear(&mut self, car: CarColor) -> bool {
        match self.states.get_mut(&car) {
            Some(state) if state.is_recording() => {
                *state = RecordingState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Freezes the open path.
    pub fn finalize(&mut self, car: CarColor) -> Result<FinalizedPath, RecorderError> {
        let state = self.states.entry(car).or_default();
        let RecordingState::Recording(points) = state else {
            return Err(RecorderError::NotRecording(car));
        };
        if points.is_empty() {
            return Err(RecorderError::EmptyPath(car));
        }

        let id = PathId(self.next_id);
        self.next_id += 1;
        let path = FinalizedPath {
            id,
            owner: car,
            points: Arc::from(std::mem::take(points)),
        };
        *state = RecordingState::Finalized(path.clone());
        Ok(path)
    }
}
