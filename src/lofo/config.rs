use crate::error::{LofoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_LIMIT: usize = 10;

/// Configuration for lofo, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LofoConfig {
    /// How many items `lofo recent` shows when --limit is not given.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for LofoConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl LofoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LofoError::Io)?;
        let config: LofoConfig =
            serde_json::from_str(&content).map_err(LofoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LofoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LofoError::Serialization)?;
        fs::write(config_path, content).map_err(LofoError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "recent-limit" => Some(self.recent_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "recent-limit" => {
                let limit: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid value for recent-limit: {}", value))?;
                if limit == 0 {
                    return Err("recent-limit must be at least 1".to_string());
                }
                self.recent_limit = limit;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let config = LofoConfig::load(dir.path()).unwrap();
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn round_trips() {
        let dir = TempDir::new().unwrap();
        let mut config = LofoConfig::default();
        config.set("recent-limit", "4").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = LofoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.recent_limit, 4);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = LofoConfig::default();
        assert!(config.set("recent-limit", "zero").is_err());
        assert!(config.set("recent-limit", "0").is_err());
        assert!(config.set("nope", "1").is_err());
    }
}
