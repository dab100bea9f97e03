//! First-person player movement and camera control.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::ScalarBlend;
use crate::input::InputSnapshot;
use crate::inventory::{Inventory, InventoryConfig};

/// Grab and hide cursor when entering gameplay.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
///
/// Yaw rotates the body entity, pitch only the camera child. The split
/// matters: movement direction is derived from the body transform, so
/// looking up or down must never tilt it.
pub fn mouse_look(
    snapshot: Res<InputSnapshot>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut player_query: Query<
        (&mut Transform, &mut LocomotionState),
        (With<Player>, With<LocallyControlled>),
    >,
    mut camera_query: Query<&mut Transform, (With<PlayerCamera>, Without<Player>)>,
) {
    let Ok((mut player_transform, mut state)) = player_query.get_single_mut() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.get_single_mut() else {
        warn_once!("No player camera; mouse look degraded to no-op");
        return;
    };

    if snapshot.look_delta == Vec2::ZERO {
        return;
    }

    let yaw_delta = state.apply_look(snapshot.look_delta, &config, time.delta_secs());
    player_transform.rotate_y(yaw_delta);
    camera_transform.rotation = Quat::from_rotation_x(state.pitch.to_radians());
}

/// Handle ground probing, horizontal movement, jumping, and gravity.
///
/// Issues a single translation to Rapier's KinematicCharacterController;
/// collision resolution stays on the physics side.
pub fn player_movement(
    snapshot: Res<InputSnapshot>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &mut LocomotionState,
            &mut KinematicCharacterController,
        ),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    let Ok((player_entity, transform, mut state, mut controller)) = player_query.get_single_mut()
    else {
        return;
    };
    let dt = time.delta_secs();

    // Ground check using a short downward raycast from just above the
    // capsule bottom (more reliable than the controller's grounded flag)
    let is_grounded = if let Ok(context) = rapier_context.get_single() {
        let ray_origin = transform.translation + Vec3::Y * (config.capsule_bottom() + 0.05);
        context
            .cast_ray(
                ray_origin,
                Vec3::NEG_Y,
                0.15,
                true,
                QueryFilter::default().exclude_collider(player_entity),
            )
            .is_some()
    } else {
        // Fallback: assume grounded if no physics context
        true
    };
    state.apply_grounding(is_grounded, &config);

    // Speed mode for this tick (crouch entry/exit already resolved by
    // the crouch system, which runs first)
    state.mode = state.resolve_mode(snapshot.crouch_held, snapshot.sprint_held);

    // Body-relative movement, normalized so diagonals aren't faster
    let mut direction = transform.right() * snapshot.move_axes.x
        + transform.forward() * snapshot.move_axes.y;
    if direction != Vec3::ZERO {
        direction = direction.normalize();
    }
    let horizontal = direction * state.speed(&config) * dt;

    if snapshot.jump_pressed {
        state.try_jump(&config);
    }
    state.integrate_gravity(&config, dt);

    let vertical = Vec3::new(0.0, state.velocity.y * dt, 0.0);
    controller.translation = Some(horizontal + vertical);
}

/// Spawn the player entity with its camera rig and hold anchor.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    config: &PlayerConfig,
    inventory_config: &InventoryConfig,
) -> Entity {
    let (capsule_a, capsule_b) = config.capsule_endpoints(config.stand_height);

    // Spawn player body
    let player = commands
        .spawn((
            Player,
            LocallyControlled,
            LocomotionState::default(),
            Inventory::new(inventory_config.slot_count),
            // Transform
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule(capsule_a, capsule_b, config.capsule_radius),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                // Enable automatic stair climbing
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                // Slope handling
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                // Snap to ground when going down slopes/stairs
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    // Camera as child of the body, at standing eye height; the hold
    // anchor hangs off the camera so held items track the look direction
    commands.entity(player).with_children(|parent| {
        parent
            .spawn((
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: config.default_fov.to_radians(),
                    ..default()
                }),
                PlayerCamera,
                EyeRig {
                    height: ScalarBlend::at(config.eye_height_standing),
                    bob_timer: 0.0,
                },
                Transform::from_xyz(0.0, config.eye_height_standing, 0.0),
            ))
            .with_children(|camera_parent| {
                camera_parent.spawn((
                    HoldAnchor,
                    Transform::from_xyz(0.35, -0.25, -0.6),
                    GlobalTransform::default(),
                    Visibility::default(),
                ));
            });
    });

    player
}
