//! Core game module - states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod blend;
mod events;
mod plugin;
mod states;

pub use blend::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
