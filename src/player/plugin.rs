//! Player plugin - movement, crouch, camera, and player-related systems.

use bevy::prelude::*;

use super::camera;
use super::components::PlayerConfig;
use super::crouch;
use super::movement;
use crate::core::PlayState;

/// Player plugin - handles player locomotion and the camera rig.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            // Cursor is captured while exploring, freed while paused
            .add_systems(OnEnter(PlayState::Exploring), movement::grab_cursor)
            .add_systems(OnExit(PlayState::Exploring), movement::release_cursor)
            .add_systems(
                Update,
                (
                    // Crouch transitions first so this tick's movement
                    // uses the resolved capsule and speed mode
                    crouch::update_crouch,
                    movement::player_movement,
                    movement::mouse_look,
                    camera::update_zoom,
                    camera::update_eye_rig,
                )
                    .chain()
                    .run_if(in_state(PlayState::Exploring)),
            );
    }
}
