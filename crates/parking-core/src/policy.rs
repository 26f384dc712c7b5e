//! Arrival detection and cancellation rules.
//!
//! Both are pure decisions; the session applies them to the recorder.

use crate::object::{CarColor, SceneObjectId};
use crate::surface::HitRegion;

/// What entering a scene object means for a car's recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterReaction {
    /// Abandon the car's recording, if any.
    Cancel(CarColor),
    /// The car reached its slot; finalize its recording, if any.
    Arrive(CarColor),
}

/// Reactions to the pointer entering `target`, in application order.
pub fn enter_reactions(target: SceneObjectId) -> Vec<EnterReaction> {
    match target {
        // A path may not cross the other car.
        SceneObjectId::Car(car) => vec![EnterReaction::Cancel(car.other())],
        SceneObjectId::Slot(owner) => vec![
            EnterReaction::Cancel(owner.other()),
            EnterReaction::Arrive(owner),
        ],
        SceneObjectId::Obstacle(_) => CarColor::ALL
            .iter()
            .map(|&car| EnterReaction::Cancel(car))
            .collect(),
    }
}

/// Vertical band the pointer must stay in while drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCorridor {
    pub top: f32,
    pub bottom: f32,
}

impl DragCorridor {
    /// A corridor that never cancels.
    pub const UNBOUNDED: DragCorridor = DragCorridor {
        top: f32::NEG_INFINITY,
        bottom: f32::INFINITY,
    };

    /// Band from the upper edge of `upper` to the lower edge of `lower`.
    pub fn between(upper: &HitRegion, lower: &HitRegion) -> Self {
        Self {
            top: upper.top(),
            bottom: lower.bottom(),
        }
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }
}

impl Default for DragCorridor {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use super::*;
    use crate::object::ObstacleId;

    #[test]
    fn test_obstacle_cancels_both() {
        let reactions = enter_reactions(SceneObjectId::Obstacle(ObstacleId::Green));
        assert_eq!(
            reactions,
            vec![
                EnterReaction::Cancel(CarColor::Red),
                EnterReaction::Cancel(CarColor::Yellow)
            ]
        );
    }

    #[test]
    fn test_slot_cancels_other_then_arrives() {
        assert_eq!(
            enter_reactions(SceneObjectId::Slot(CarColor::Red)),
            vec![
                EnterReaction::Cancel(CarColor::Yellow),
                EnterReaction::Arrive(CarColor::Red)
            ]
        );
        assert_eq!(
            enter_reactions(SceneObjectId::Car(CarColor::Yellow)),
            vec![EnterReaction::Cancel(CarColor::Red)]
        );
    }

    #[test]
    fn test_corridor_from_regions() {
        let upper = HitRegion {
            id: SceneObjectId::Obstacle(ObstacleId::Blue),
            center: Vec2::new(0.0, 100.0),
            half_size: Vec2::new(20.0, 30.0),
            rotation: 0.0,
            z: 0,
        };
        let lower = HitRegion {
            id: SceneObjectId::Car(CarColor::Yellow),
            center: Vec2::new(0.0, 500.0),
            half_size: Vec2::new(20.0, 50.0),
            rotation: 0.0,
            z: 0,
        };

        let corridor = DragCorridor::between(&upper, &lower);
        assert_eq!(corridor, DragCorridor { top: 70.0, bottom: 550.0 });
        assert!(corridor.contains(70.0));
        assert!(corridor.contains(300.0));
        assert!(!corridor.contains(69.9));
        assert!(!corridor.contains(551.0));
        assert!(DragCorridor::default().contains(-1.0e9));
    }
}
