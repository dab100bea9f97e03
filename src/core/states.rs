//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Locomotion,
//! interaction, and inventory systems only run while exploring.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The sandbox boots straight into gameplay: `Loading` while tuning
/// data is read, then `InGame` for the rest of the session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading tuning data
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing stays inside InGame so the world is kept alive; only the
/// per-tick gameplay systems stop running.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - movement, interaction, inventory
    #[default]
    Exploring,
    /// Gameplay frozen, overlay shown
    Paused,
}
