//! Live polyline overlay of the path being drawn.

use std::collections::HashMap;

use bevy::math::Vec2;

use crate::object::{CarColor, Color};
use crate::surface::{OverlayHandle, RenderSurface};

/// Trace appearance per car.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStyle {
    pub red: Color,
    pub yellow: Color,
    pub width: f32,
}

impl TraceStyle {
    pub fn color(&self, car: CarColor) -> Color {
        match car {
            CarColor::Red => self.red,
            CarColor::Yellow => self.yellow,
        }
    }
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            red: Color::RED_TRACE,
            yellow: Color::YELLOW_TRACE,
            width: 20.0,
        }
    }
}

/// Keeps at most one overlay per car on the surface.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    style: TraceStyle,
    overlays: HashMap<CarColor, OverlayHandle>,
}

impl TraceRenderer {
    pub fn new(style: TraceStyle) -> Self {
        Self {
            style,
            overlays: HashMap::new(),
        }
    }

    pub fn overlay(&self, car: CarColor) -> Option<OverlayHandle> {
        self.overlays.get(&car).copied()
    }

    /// Replaces the car's overlay with a polyline through `path`.
    ///
    /// A single point draws a zero-length line.
    pub fn redraw<S: RenderSurface>(&mut self, surface: &mut S, car: CarColor, path: &[Vec2]) {
        self.remove(surface, car);
        if path.is_empty() {
            return;
        }
        let handle = surface.draw_polyline(path, self.style.color(car), self.style.width);
        self.overlays.insert(car, handle);
    }

    /// Removes the car's overlay. Returns whether one was present.
    pub fn remove<S: RenderSurface>(&mut self, surface: &mut S, car: CarColor) -> bool {
        match self.overlays.remove(&car) {
            Some(handle) => {
                surface.remove_overlay(handle);
                true
            }
            None => false,
        }
    }
}
