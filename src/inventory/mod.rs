//! Inventory module - slot array, selection cursor, and equip/drop protocol.

mod components;
mod systems;

pub use components::{Inventory, InventoryConfig, ItemIcon, PickupOutcome};

use bevy::prelude::*;

use crate::core::PlayState;
use crate::interaction::scan_for_interactable;

/// Inventory plugin - pickup, selection, and drop handling.
///
/// Runs after the interaction scan so pickup sees this tick's crosshair
/// target, in the same order the original input loop processed them:
/// interact, slot switch, drop.
pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryConfig>().add_systems(
            Update,
            (
                systems::handle_pickup,
                systems::handle_selection,
                systems::handle_drop,
            )
                .chain()
                .after(scan_for_interactable)
                .run_if(in_state(PlayState::Exploring)),
        );
    }
}
