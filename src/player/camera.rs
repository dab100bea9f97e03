//! Camera rig systems: zoom FOV blending, eye height, and head bob.

use bevy::prelude::*;

use super::components::*;
use crate::core::exp_lerp;
use crate::input::InputSnapshot;

/// Toggle zoom on its key edge and blend the camera FOV toward the
/// current target every tick.
///
/// The blend is a rate-based lerp, so it eases out as it approaches the
/// target rather than ramping linearly.
pub fn update_zoom(
    snapshot: Res<InputSnapshot>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut LocomotionState, (With<Player>, With<LocallyControlled>)>,
    mut camera_query: Query<&mut Projection, With<PlayerCamera>>,
) {
    let Ok(mut state) = player_query.get_single_mut() else {
        return;
    };
    let Ok(mut projection) = camera_query.get_single_mut() else {
        warn_once!("No player camera; zoom degraded to no-op");
        return;
    };

    if snapshot.zoom_pressed {
        state.zooming = !state.zooming;
    }

    let target = if state.zooming {
        config.zoom_fov
    } else {
        config.default_fov
    };

    if let Projection::Perspective(perspective) = projection.as_mut() {
        perspective.fov = exp_lerp(
            perspective.fov,
            target.to_radians(),
            config.zoom_speed,
            time.delta_secs(),
        );
    }
}

/// Position the camera each tick: smoothed crouch eye height plus a
/// sinusoidal head bob while moving on the ground.
pub fn update_eye_rig(
    snapshot: Res<InputSnapshot>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    player_query: Query<&LocomotionState, (With<Player>, With<LocallyControlled>)>,
    mut camera_query: Query<(&mut Transform, &mut EyeRig), With<PlayerCamera>>,
) {
    let Ok(state) = player_query.get_single() else {
        return;
    };
    let Ok((mut transform, mut rig)) = camera_query.get_single_mut() else {
        warn_once!("No player camera; eye rig degraded to no-op");
        return;
    };
    let dt = time.delta_secs();

    let eye_height = rig.height.advance(dt);

    let moving = snapshot.move_axes != Vec2::ZERO;
    let bob = if moving && state.is_grounded {
        let (speed, amount) = if state.mode == SpeedMode::Sprint {
            (config.sprint_bob_speed, config.sprint_bob_amount)
        } else {
            (config.walk_bob_speed, config.walk_bob_amount)
        };
        rig.bob_timer += dt * speed;
        rig.bob_timer.sin() * amount
    } else {
        rig.bob_timer = 0.0;
        0.0
    };

    transform.translation.y = eye_height + bob;
}
