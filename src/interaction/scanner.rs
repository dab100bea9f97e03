//! Raycast-based detection of the interactable under the crosshair.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::player::{Player, PlayerCamera};

/// Marker for world objects the player can pick up.
#[derive(Component)]
pub struct Interactable;

/// Interaction tuning.
#[derive(Resource)]
pub struct InteractionConfig {
    /// Maximum pickup distance, in units.
    pub max_distance: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { max_distance: 3.0 }
    }
}

/// What the crosshair is currently on, rewritten every tick.
///
/// Consumed the same tick by the pickup system and the UI prompt, so
/// prompt visibility always tracks the crosshair exactly.
#[derive(Resource, Default)]
pub struct InteractionTarget {
    pub entity: Option<Entity>,
    pub distance: f32,
}

/// Cast a single ray from the camera along its forward vector.
///
/// The nearest physical hit wins; it only counts as a target if it
/// carries the Interactable marker. Tagged objects behind untagged
/// geometry are deliberately not found - no picking through walls.
///
/// Stateless per tick: the scan re-runs even when nothing moved.
pub fn scan_for_interactable(
    config: Res<InteractionConfig>,
    rapier_context: Query<&RapierContext>,
    player_query: Query<Entity, With<Player>>,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    interactable_query: Query<(), With<Interactable>>,
    mut target: ResMut<InteractionTarget>,
) {
    *target = InteractionTarget::default();

    let Ok(context) = rapier_context.get_single() else {
        return;
    };
    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };

    let mut filter = QueryFilter::default();
    if let Ok(player_entity) = player_query.get_single() {
        filter = filter.exclude_collider(player_entity);
    }

    let origin = camera_transform.translation();
    let direction = camera_transform.forward();

    if let Some((entity, distance)) =
        context.cast_ray(origin, *direction, config.max_distance, true, filter)
    {
        if interactable_query.contains(entity) {
            target.entity = Some(entity);
            target.distance = distance;
        }
    }
}
