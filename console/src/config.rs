use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::SearchSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_PLAYER_NAME_LENGTH: usize = 32;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub player_name: String,
    pub search: SearchSettings,
    /// Print the engine's score and searched position count after each reply.
    pub show_evaluation: bool,
    /// Two humans take turns at X and O and the engine only answers hints.
    pub two_players: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(format!(
                "player_name must be at most {} characters",
                MAX_PLAYER_NAME_LENGTH
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            search: SearchSettings::default(),
            show_evaluation: false,
            two_players: false,
        }
    }
}
