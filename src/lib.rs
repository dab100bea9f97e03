//! Scavenger - a first-person pickup sandbox in Bevy.
//!
//! Walk, sprint, crouch, and jump around a small scene; look at props to
//! pick them up into a slot-based inventory, cycle slots with the scroll
//! wheel or number keys, and drop them back into the world.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, blend helpers
//! - **Input**: Per-tick abstracted input snapshot
//! - **Player**: Locomotion state machine, crouch, camera rig
//! - **Interaction**: Crosshair raycast scanning
//! - **Inventory**: Slots, selection cursor, equip/drop protocol
//! - **World**: Tuning data and the demo scene
//! - **UI**: HUD, prompts, pause overlay

pub mod core;
pub mod input;
pub mod interaction;
pub mod inventory;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ScavengerPlugin;

impl Plugin for ScavengerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input snapshot
            .add_plugins(input::InputPlugin)

            // Player locomotion and camera
            .add_plugins(player::PlayerPlugin)

            // Crosshair scanning
            .add_plugins(interaction::InteractionPlugin)

            // Inventory protocol
            .add_plugins(inventory::InventoryPlugin)

            // World setup
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
