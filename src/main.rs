//! Scavenger - Entry Point
//!
//! A first-person pickup sandbox.
//!
//! Controls:
//! - WASD: Move, Shift: Sprint, Ctrl: Crouch, Space: Jump
//! - Mouse: Look around, V: Zoom
//! - E: Pick up, Q: Drop, 1-3 / Scroll: Select slot
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Scavenger".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(scavenger::ScavengerPlugin)

        .run();
}
