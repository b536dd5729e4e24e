//! Level configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to load or validate a [`LevelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid json5 for the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings for an in-memory level and its decoration pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Seed for the decoration random source.
    pub seed: u64,
    /// Lowest block y of the level.
    pub min_y: i32,
    /// Level height in blocks, counted upward from `min_y`.
    pub height: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min_y: 0,
            height: 256,
        }
    }
}

impl LevelConfig {
    /// Loads the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json5::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::Invalid("height must be positive"));
        }
        if self.height > 4096 {
            return Err(ConfigError::Invalid("height must be at most 4096"));
        }
        Ok(())
    }
}
