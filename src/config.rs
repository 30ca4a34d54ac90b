use std::fs;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Logical key the local adapter stores the snapshot under
pub const DEFAULT_STORAGE_KEY: &str = "planit-app-v1";

const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Store tuning, readable from an optional `planit.toml`. Every field has a
/// default, so a missing file or a partial file both work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Delay after the last state change before a save is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Logical key for the local snapshot (local file stem)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            storage_key: DEFAULT_STORAGE_KEY.into(),
        }
    }
}

impl StoreConfig {
    pub fn debounce(&self) -> Duration {
        Duration::milliseconds(self.debounce_ms as i64)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.into()
}

/// Read the store config, falling back to defaults when the file is absent.
pub fn read_config(path: &Path) -> Result<StoreConfig, ConfigError> {
    if !path.exists() {
        return Ok(StoreConfig::default());
    }
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(&dir.path().join("planit.toml")).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.debounce(), Duration::milliseconds(500));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planit.toml");
        fs::write(&path, "debounce_ms = 50\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planit.toml");
        fs::write(&path, "debounce_ms = [not a number").unwrap();
        assert!(read_config(&path).is_err());
    }
}
