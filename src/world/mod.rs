//! World module - tuning data and the demo scene.

mod config;
mod error;
mod plugin;
mod spawning;

pub use config::{load_tuning, TuningFile, TUNING_PATH};
pub use error::ConfigLoadError;
pub use plugin::WorldPlugin;
pub use spawning::SceneObject;
