//! Window input forwarding.
//!
//! Turns cursor, mouse button and resize events of the primary window into
//! [`PointerInput`] and [`ViewportResized`] messages.

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};

use crate::bevy::{PointerInput, ViewportResized};
use crate::input::PointerEvent;

/// Orders one frame of window input.
///
/// A press goes first, at the first cursor move of the frame or at `cursor`
/// when the cursor did not move, so the start of the drag is recorded. The
/// moves follow, then a release at the last known position.
fn frame_pointer_events(moves: &[Vec2], pressed: bool, released: bool, cursor: Vec2) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves.len() + 2);
    if pressed {
        events.push(PointerEvent::down(moves.first().copied().unwrap_or(cursor)));
    }
    events.extend(moves.iter().copied().map(PointerEvent::moved));
    if released {
        events.push(PointerEvent::up(cursor));
    }
    events
}

/// Emits pointer messages from the primary window.
pub fn emit_pointer_input(
    mut cursor_moved: MessageReader<CursorMoved>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut last_position: Local<Vec2>,
    mut writer: MessageWriter<PointerInput>,
) {
    let moves: Vec<Vec2> = cursor_moved.read().map(|moved| moved.position).collect();
    if let Some(&last) = moves.last() {
        *last_position = last;
    }

    let cursor = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .unwrap_or(*last_position);

    let events = frame_pointer_events(
        &moves,
        mouse_button.just_pressed(MouseButton::Left),
        mouse_button.just_released(MouseButton::Left),
        cursor,
    );
    for event in events {
        writer.write(PointerInput(event));
    }
}

/// Forwards primary window resizes.
pub fn forward_window_resized(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut writer: MessageWriter<ViewportResized>,
) {
    let Ok(primary) = primary.single() else {
        return;
    };
    for event in resized.read().filter(|e| e.window == primary) {
        writer.write(ViewportResized {
            width: event.width,
            height: event.height,
        });
    }
}

/// Fits the layout to the primary window once at startup.
pub fn fit_viewport_to_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut writer: MessageWriter<ViewportResized>,
) {
    let Ok(window) = windows.single() else {
        tracing::warn!("[parking] no primary window; keeping the configured viewport");
        return;
    };
    writer.write(ViewportResized {
        width: window.width(),
        height: window.height(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_precedes_moves_of_same_frame() {
        let moves = [Vec2::new(10.0, 10.0), Vec2::new(12.0, 14.0)];
        let events = frame_pointer_events(&moves, true, false, Vec2::new(12.0, 14.0));
        assert_eq!(
            events,
            vec![
                PointerEvent::down(Vec2::new(10.0, 10.0)),
                PointerEvent::moved(Vec2::new(10.0, 10.0)),
                PointerEvent::moved(Vec2::new(12.0, 14.0)),
            ]
        );
    }

    #[test]
    fn test_press_without_moves_uses_cursor() {
        let events = frame_pointer_events(&[], true, false, Vec2::new(3.0, 4.0));
        assert_eq!(events, vec![PointerEvent::down(Vec2::new(3.0, 4.0))]);
    }

    #[test]
    fn test_release_follows_moves() {
        let moves = [Vec2::new(1.0, 1.0)];
        let events = frame_pointer_events(&moves, false, true, Vec2::new(1.0, 1.0));
        assert_eq!(
            events,
            vec![
                PointerEvent::moved(Vec2::new(1.0, 1.0)),
                PointerEvent::up(Vec2::new(1.0, 1.0)),
            ]
        );
    }
}
