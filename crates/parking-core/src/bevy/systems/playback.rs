//! Playback driving.

use bevy::prelude::*;

use crate::bevy::{ParkingState, SurfaceQueue};

/// Advances every active playback to the current elapsed time.
pub fn drive_playback(
    time: Res<Time>,
    mut state: ResMut<ParkingState>,
    mut surface: ResMut<SurfaceQueue>,
) {
    if state.session.animator().active_count() == 0 {
        return;
    }
    state.session.tick(&mut *surface, time.elapsed());
}
