//! UI module - HUD, interaction prompt, and pause overlay.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
