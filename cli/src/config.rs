use serde::{Deserialize, Serialize};
use std::path::Path;

use tictactoe_engine::Difficulty;

pub const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

const MAX_MOVE_DELAY_MS: u64 = 5000;

fn default_move_delay_ms() -> u64 {
    500
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    pub difficulty: Difficulty,
    #[serde(default = "default_move_delay_ms")]
    pub move_delay_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            move_delay_ms: default_move_delay_ms(),
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!(
                "Move delay ({} ms) cannot exceed {} ms",
                self.move_delay_ms, MAX_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }

    /// Missing file yields the defaults; an unreadable or invalid file
    /// is an error rather than a silent fallback.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_cli_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let config = CliConfig::default();
        let path = get_temp_file_path();
        config.save(&path).unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let path = PathBuf::from("this_file_does_not_exist.yaml");
        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }

    #[test]
    fn test_missing_delay_field_uses_default() {
        let path = get_temp_file_path();
        std::fs::write(&path, "difficulty: Easy\n").unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.difficulty, Difficulty::Easy);
        assert_eq!(loaded.move_delay_ms, 500);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = get_temp_file_path();
        std::fs::write(&path, "difficulty: Impossible\nmove_delay_ms: 500\n").unwrap();
        let result = CliConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_excessive_delay_fails_validation() {
        let config = CliConfig {
            difficulty: Difficulty::Hard,
            move_delay_ms: 60_000,
        };
        assert!(config.validate().is_err());
    }
}
