//! Crouch state transitions and the stand-up clearance probe.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::input::InputSnapshot;

/// Drive crouch entry and exit from the held crouch key.
///
/// Entering swaps the capsule immediately and starts the smoothed eye
/// descent. Leaving is gated on headroom: while the clearance probe
/// reports an obstruction the player stays crouched, and the probe is
/// re-run every tick until it clears - there is no timeout.
pub fn update_crouch(
    snapshot: Res<InputSnapshot>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    mut commands: Commands,
    mut player_query: Query<
        (Entity, &Transform, &mut LocomotionState),
        (With<Player>, With<LocallyControlled>),
    >,
    mut rig_query: Query<&mut EyeRig, With<PlayerCamera>>,
) {
    let Ok((player_entity, transform, mut state)) = player_query.get_single_mut() else {
        return;
    };

    // The probe only matters on ticks trying to stand; re-evaluated
    // every such tick until it clears
    let clearance_clear = !snapshot.crouch_held
        && state.crouching
        && can_stand(player_entity, transform, &config, &rapier_context);

    match state.resolve_crouch(snapshot.crouch_held, clearance_clear) {
        Some(CrouchTransition::Entered) => {
            swap_capsule(&mut commands, player_entity, &config, config.crouch_height);
            start_eye_blend(&mut rig_query, &config, config.eye_height_crouched);
        }
        Some(CrouchTransition::Stood) => {
            swap_capsule(&mut commands, player_entity, &config, config.stand_height);
            start_eye_blend(&mut rig_query, &config, config.eye_height_standing);
        }
        None => {}
    }
}

/// Upward raycast from the crouched capsule top, spanning the height
/// regained by standing. Any hit that isn't the player means no room.
fn can_stand(
    player_entity: Entity,
    transform: &Transform,
    config: &PlayerConfig,
    rapier_context: &Query<&RapierContext>,
) -> bool {
    let Ok(context) = rapier_context.get_single() else {
        // No physics context to consult; don't leave the player stuck
        return true;
    };

    let crouch_top = config.capsule_bottom() + config.crouch_height;
    let ray_origin = transform.translation + Vec3::Y * crouch_top;
    let ray_length = config.stand_height - config.crouch_height;

    context
        .cast_ray(
            ray_origin,
            Vec3::Y,
            ray_length,
            true,
            QueryFilter::default().exclude_collider(player_entity),
        )
        .is_none()
}

/// Replace the body collider with a capsule of the given total height.
/// The feet endpoint stays anchored so the transition never pushes the
/// player out of the floor.
fn swap_capsule(commands: &mut Commands, player: Entity, config: &PlayerConfig, height: f32) {
    let (a, b) = config.capsule_endpoints(height);
    commands
        .entity(player)
        .insert(Collider::capsule(a, b, config.capsule_radius));
}

fn start_eye_blend(
    rig_query: &mut Query<&mut EyeRig, With<PlayerCamera>>,
    config: &PlayerConfig,
    target: f32,
) {
    let Ok(mut rig) = rig_query.get_single_mut() else {
        warn_once!("No player camera; crouch eye blend degraded to no-op");
        return;
    };
    // Capture wherever the previous blend left off - last toggle wins
    let current = rig.height.advance(0.0);
    rig.height
        .start(current, target, config.crouch_blend_duration);
}
