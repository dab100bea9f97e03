//! Interaction module - crosshair raycast scanning for pickup targets.

mod scanner;

pub use scanner::{scan_for_interactable, Interactable, InteractionConfig, InteractionTarget};

use bevy::prelude::*;

use crate::core::PlayState;

/// Interaction plugin - keeps the crosshair target fresh every tick.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionConfig>()
            .init_resource::<InteractionTarget>()
            .add_systems(
                Update,
                scan_for_interactable.run_if(in_state(PlayState::Exploring)),
            );
    }
}
