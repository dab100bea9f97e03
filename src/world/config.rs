//! Tuning data loading from RON.
//!
//! All gameplay constants live in `assets/config/player.ron`. A missing
//! or malformed file logs a warning and falls back to the compiled-in
//! defaults; the game always starts.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigLoadError;
use crate::core::GameState;
use crate::inventory::InventoryConfig;
use crate::player::PlayerConfig;

/// Path to the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/config/player.ron";

/// Top-level structure of the tuning file. Every section is optional;
/// omitted fields take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub player: PlayerConfig,
    pub inventory: InventoryConfig,
}

/// Load and parse the tuning file.
pub fn load_tuning(path: &str) -> Result<TuningFile, ConfigLoadError> {
    if !Path::new(path).exists() {
        return Err(ConfigLoadError::FileNotFound(path.to_string()));
    }
    let contents = fs::read_to_string(path).map_err(|err| ConfigLoadError::ReadError {
        path: path.to_string(),
        details: err.to_string(),
    })?;
    ron::from_str(&contents).map_err(|err| ConfigLoadError::ParseError {
        path: path.to_string(),
        details: err.to_string(),
    })
}

/// Startup system: install tuning resources and enter gameplay.
pub fn load_tuning_data(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    match load_tuning(TUNING_PATH) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.player);
            commands.insert_resource(tuning.inventory);
        }
        Err(err) => {
            warn!("{}; using default tuning", err);
        }
    }
    next_state.set(GameState::InGame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_tuning_file() {
        let tuning: TuningFile = ron::from_str(
            r#"(
                player: (
                    walk_speed: 4.0,
                    sprint_speed: 8.0,
                ),
                inventory: (
                    slot_count: 5,
                ),
            )"#,
        )
        .expect("valid tuning");
        assert_eq!(tuning.player.walk_speed, 4.0);
        assert_eq!(tuning.inventory.slot_count, 5);
        // Omitted fields keep their defaults
        assert_eq!(tuning.player.crouch_speed, 2.5);
        assert_eq!(tuning.inventory.drop_impulse, 300.0);
    }

    #[test]
    fn missing_file_is_reported_not_fatal() {
        let err = load_tuning("assets/config/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileNotFound(_)));
    }
}
