//! Pointer routing into the session.

use bevy::prelude::*;

use crate::bevy::{ParkingState, PointerInput, SurfaceQueue};

/// Feeds every pending [`PointerInput`] through the router, in order.
pub fn route_pointer_input(
    mut reader: MessageReader<PointerInput>,
    mut state: ResMut<ParkingState>,
    mut surface: ResMut<SurfaceQueue>,
) {
    let ParkingState { session, router } = &mut *state;
    for PointerInput(event) in reader.read() {
        router.route(session, &mut *surface, *event);
    }
}
