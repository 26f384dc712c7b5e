//! Absolute placement of the scene for a given viewport.
//!
//! Scene space is the pointer's space: logical pixels, origin at the top-left
//! corner, y pointing down.

use bevy::math::Vec2;

use crate::config::SceneConfig;
use crate::object::{CarColor, ObstacleId, SceneObjectId};
use crate::policy::DragCorridor;
use crate::surface::{HitMap, HitRegion};

/// Scene placement computed from a [`SceneConfig`] and a viewport size.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    viewport: Vec2,
    sprite_scale: f32,
    backdrop_center: Vec2,
    hit_map: HitMap,
}

impl SceneLayout {
    pub fn compute(config: &SceneConfig, width: f32, height: f32) -> Self {
        let scale = width.min(height) / config.design_size;
        let sprite_scale = config.sprite_scale * scale;
        let lift = height * config.lift_ratio;

        let place = |offset: [f32; 2]| {
            Vec2::new(
                width / 2.0 + offset[0] * sprite_scale,
                height / 2.0 - offset[1] * sprite_scale - lift,
            )
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let regions = config.objects.iter().enumerate().map(|(z, object)| HitRegion {
            id: object.id,
            center: place(object.offset),
            half_size: Vec2::from(object.sprite.size) * sprite_scale / 2.0,
            rotation: 0.0,
            z: z as i32,
        });

        Self {
            viewport: Vec2::new(width, height),
            sprite_scale,
            backdrop_center: place([0.0, 0.0]),
            hit_map: HitMap::new(regions),
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Scale applied to every sprite's native size.
    pub fn sprite_scale(&self) -> f32 {
        self.sprite_scale
    }

    pub fn backdrop_center(&self) -> Vec2 {
        self.backdrop_center
    }

    /// Home regions of every object, in draw order.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn region(&self, id: SceneObjectId) -> Option<&HitRegion> {
        self.hit_map.get(id)
    }

    /// Where `car` sits before it is ever driven.
    pub fn home(&self, car: CarColor) -> Option<Vec2> {
        self.region(SceneObjectId::Car(car)).map(|r| r.center)
    }

    /// From the top of the blue car down to the bottom of the yellow car's
    /// home spot.
    pub fn corridor(&self) -> DragCorridor {
        match (
            self.region(SceneObjectId::Obstacle(ObstacleId::Blue)),
            self.region(SceneObjectId::Car(CarColor::Yellow)),
        ) {
            (Some(upper), Some(lower)) => DragCorridor::between(upper, lower),
            _ => DragCorridor::UNBOUNDED,
        }
    }
}
