//! Player module - locomotion state machine, camera rig, and spawning.

mod camera;
mod components;
mod crouch;
mod movement;
mod plugin;

pub use components::*;
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
