//! Input module - abstracted per-tick input snapshot and key bindings.

mod snapshot;

pub use snapshot::{gather_input, InputSnapshot, KeyBindings};

use bevy::prelude::*;

use crate::core::PlayState;

/// Input plugin - rebuilds the input snapshot at the start of every tick.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<InputSnapshot>()
            .add_systems(
                PreUpdate,
                gather_input.run_if(in_state(PlayState::Exploring)),
            );
    }
}
