use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use bevy::prelude::*;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use shared::{
    ToolAction, DEFAULT_FREE_PLACE_DISTANCE, DEFAULT_QUEUED_EVENTS_PER_FRAME,
    DEFAULT_TERRAIN_REACH,
};
use thiserror::Error;

use crate::input::{default_bindings, InputBinding};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid RON: {0}")]
    Ron(#[from] ron::Error),
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WaterPlacerConfig {
    pub general: GeneralConfig,
    pub input: InputConfig,
    pub tool: ToolConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Play sounds on water placement.
    pub play_sounds: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { play_sounds: true }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keyboard shortcut that opens and closes the water placer.
    pub open_water_placer_key: KeyCode,
    pub bindings: BTreeMap<ToolAction, Vec<InputBinding>>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            open_water_placer_key: KeyCode::BracketLeft,
            bindings: default_bindings(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    pub free_place_distance: f32,
    pub terrain_reach: f32,
    pub queued_events_per_frame: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            free_place_distance: DEFAULT_FREE_PLACE_DISTANCE,
            terrain_reach: DEFAULT_TERRAIN_REACH,
            queued_events_per_frame: DEFAULT_QUEUED_EVENTS_PER_FRAME,
        }
    }
}

pub fn read_config(path: &Path) -> Result<WaterPlacerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

pub fn write_config(config: &WaterPlacerConfig, path: &Path) -> Result<(), ConfigError> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(4)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(false);

    let serialized = ron::ser::to_string_pretty(config, pretty_config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(serialized.as_bytes())?;
    Ok(())
}

/// Loads the config at `path`, falling back to defaults, and writes the
/// result back so new settings show up in existing files.
pub fn load_config(path: &Path) -> WaterPlacerConfig {
    let config = match read_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No water placer config at {:?}, using defaults", path);
            WaterPlacerConfig::default()
        }
        Err(e) => {
            warn!("Failed to read water placer config {:?}: {}", path, e);
            WaterPlacerConfig::default()
        }
    };

    match write_config(&config, path) {
        Ok(_) => debug!("Water placer config saved to {:?}", path),
        Err(e) => error!("Failed to save water placer config to {:?}: {}", path, e),
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "waterplacer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("waterplacer.ron")
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_path("missing");

        let config = load_config(&path);

        assert_eq!(config, WaterPlacerConfig::default());
        assert!(config.general.play_sounds);
        assert_eq!(config.input.open_water_placer_key, KeyCode::BracketLeft);
        assert_eq!(read_config(&path).unwrap(), config);
    }

    #[test]
    fn saved_changes_survive_reload() {
        let path = scratch_path("reload");
        let mut config = WaterPlacerConfig::default();
        config.general.play_sounds = false;
        config.input.open_water_placer_key = KeyCode::KeyJ;
        config.tool.queued_events_per_frame = 4;
        config
            .input
            .bindings
            .insert(ToolAction::Action, vec![InputBinding::Key(KeyCode::Enter)]);

        write_config(&config, &path).unwrap();

        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_entries() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(general: (play_sounds: false))").unwrap();

        let config = load_config(&path);

        assert!(!config.general.play_sounds);
        assert_eq!(config.input, InputConfig::default());
        assert_eq!(config.tool, ToolConfig::default());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_and_is_rewritten() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "this is not ron").unwrap();

        assert!(matches!(read_config(&path), Err(ConfigError::Ron(_))));
        assert_eq!(load_config(&path), WaterPlacerConfig::default());
        assert!(read_config(&path).is_ok());
    }
}
