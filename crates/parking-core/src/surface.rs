//! The rendering surface the core draws on.
//!
//! The core never touches a renderer directly. It places cars, draws and
//! removes trace polylines, and asks what sits under the pointer.

use bevy::math::Vec2;

use crate::object::{CarColor, Color, SceneObjectId};

/// Handle to a polyline drawn on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

/// Operations the core needs from a renderer.
pub trait RenderSurface {
    /// Moves a car to `position` (scene space) with `rotation` (radians).
    fn place_object(&mut self, car: CarColor, position: Vec2, rotation: f32);

    /// Draws a polyline through `points` and returns its handle.
    fn draw_polyline(&mut self, points: &[Vec2], color: Color, width: f32) -> OverlayHandle;

    /// Removes a previously drawn polyline. Unknown handles are ignored.
    fn remove_overlay(&mut self, handle: OverlayHandle);

    /// Topmost interactive object under `point`.
    fn hit_test(&self, point: Vec2) -> Option<SceneObjectId>;
}

/// Oriented rectangle used for pointer hit tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub id: SceneObjectId,
    pub center: Vec2,
    pub half_size: Vec2,
    /// Clockwise rotation in scene space, radians.
    pub rotation: f32,
    /// Draw order; higher values are on top.
    pub z: i32,
}

impl HitRegion {
    pub fn contains(&self, point: Vec2) -> bool {
        // Rotate the offset back into the region's local frame.
        let offset = point - self.center;
        let (sin, cos) = (-self.rotation).sin_cos();
        let local = Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);
        local.x.abs() <= self.half_size.x && local.y.abs() <= self.half_size.y
    }

    /// Y of the upper edge, ignoring rotation.
    pub fn top(&self) -> f32 {
        self.center.y - self.half_size.y
    }

    /// Y of the lower edge, ignoring rotation.
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_size.y
    }
}

/// A set of hit regions resolved by draw order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn new(regions: impl IntoIterator<Item = HitRegion>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Replaces the region for `region.id`, or adds it.
    pub fn upsert(&mut self, region: HitRegion) {
        match self.regions.iter_mut().find(|r| r.id == region.id) {
            Some(existing) => *existing = region,
            None => self.regions.push(region),
        }
    }

    pub fn get(&self, id: SceneObjectId) -> Option<&HitRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Topmost region containing `point`. Later regions win ties.
    pub fn topmost(&self, point: Vec2) -> Option<SceneObjectId> {
        self.regions
            .iter()
            .filter(|r| r.contains(point))
            .max_by_key(|r| r.z)
            .map(|r| r.id)
    }
}

/// In-memory surface that records every call, for tests.
#[cfg(test)]
pub(crate) mod test_surface {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct DrawnOverlay {
        pub points: Vec<Vec2>,
        pub color: Color,
    }

    #[derive(Debug, Default)]
    pub(crate) struct TestSurface {
        pub hit_map: HitMap,
        pub overlays: HashMap<OverlayHandle, DrawnOverlay>,
        pub placements: Vec<(CarColor, Vec2, f32)>,
        pub removed: Vec<OverlayHandle>,
        next_handle: u64,
    }

    impl TestSurface {
        pub fn with_regions(regions: impl IntoIterator<Item = HitRegion>) -> Self {
            Self {
                hit_map: HitMap::new(regions),
                ..Self::default()
            }
        }

        /// Overlays currently drawn in `color`.
        pub fn overlays_in(&self, color: Color) -> Vec<&DrawnOverlay> {
            self.overlays.values().filter(|o| o.color == color).collect()
        }

        pub fn last_placement(&self, car: CarColor) -> Option<(Vec2, f32)> {
            self.placements
                .iter()
                .rev()
                .find(|(c, _, _)| *c == car)
                .map(|&(_, pos, rot)| (pos, rot))
        }
    }

    impl RenderSurface for TestSurface {
        fn place_object(&mut self, car: CarColor, position: Vec2, rotation: f32) {
            self.placements.push((car, position, rotation));
        }

        fn draw_polyline(&mut self, points: &[Vec2], color: Color, _width: f32) -> OverlayHandle {
            let handle = OverlayHandle(self.next_handle);
            self.next_handle += 1;
            self.overlays.insert(
                handle,
                DrawnOverlay {
                    points: points.to_vec(),
                    color,
                },
            );
            handle
        }

        fn remove_overlay(&mut self, handle: OverlayHandle) {
            if self.overlays.remove(&handle).is_some() {
                self.removed.push(handle);
            }
        }

        fn hit_test(&self, point: Vec2) -> Option<SceneObjectId> {
            self.hit_map.topmost(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::object::ObstacleId;

    fn region(id: SceneObjectId, center: Vec2, half_size: Vec2, z: i32) -> HitRegion {
        HitRegion {
            id,
            center,
            half_size,
            rotation: 0.0,
            z,
        }
    }

    #[test]
    fn test_rotated_region() {
        let mut r = region(
            SceneObjectId::Car(CarColor::Red),
            Vec2::new(100.0, 100.0),
            Vec2::new(10.0, 40.0),
            0,
        );
        assert!(r.contains(Vec2::new(100.0, 135.0)));
        assert!(!r.contains(Vec2::new(135.0, 100.0)));

        r.rotation = FRAC_PI_2;
        assert!(!r.contains(Vec2::new(100.0, 135.0)));
        assert!(r.contains(Vec2::new(135.0, 100.0)));
    }

    #[test]
    fn test_topmost_wins() {
        let slot = SceneObjectId::Slot(CarColor::Red);
        let car = SceneObjectId::Car(CarColor::Red);
        let mut map = HitMap::new([
            region(slot, Vec2::ZERO, Vec2::splat(50.0), 1),
            region(car, Vec2::ZERO, Vec2::splat(10.0), 5),
        ]);

        assert_eq!(map.topmost(Vec2::ZERO), Some(car));
        assert_eq!(map.topmost(Vec2::new(30.0, 0.0)), Some(slot));
        assert_eq!(map.topmost(Vec2::new(300.0, 0.0)), None);

        map.upsert(region(car, Vec2::new(200.0, 0.0), Vec2::splat(10.0), 5));
        assert_eq!(map.regions().len(), 2);
        assert_eq!(map.topmost(Vec2::ZERO), Some(slot));

        map.upsert(region(
            SceneObjectId::Obstacle(ObstacleId::Blue),
            Vec2::ZERO,
            Vec2::splat(5.0),
            3,
        ));
        assert_eq!(
            map.topmost(Vec2::ZERO),
            Some(SceneObjectId::Obstacle(ObstacleId::Blue))
        );
    }
}
