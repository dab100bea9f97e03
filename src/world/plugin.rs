//! World plugin - tuning data loading and demo scene setup.

use bevy::prelude::*;

use super::config::load_tuning_data;
use super::spawning::{cleanup_scene, setup_scene};
use crate::core::GameState;

/// World plugin - loads tuning at startup and builds the sandbox scene.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_tuning_data)
            .add_systems(OnEnter(GameState::InGame), setup_scene)
            .add_systems(OnExit(GameState::InGame), cleanup_scene);
    }
}
