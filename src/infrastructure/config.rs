//! Configuration management

use crate::domain::DEFAULT_EXCERPT_LENGTH;
use crate::error::{DarkwriteError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Name of the metadata directory inside a workspace
pub const META_DIR: &str = ".darkwrite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    #[serde(default)]
    pub read_delay_ms: u64,
    #[serde(default)]
    pub write_delay_ms: u64,
    pub created: DateTime<Utc>,
}

fn default_excerpt_length() -> usize {
    DEFAULT_EXCERPT_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            read_delay_ms: 0,
            write_delay_ms: 0,
            created: Utc::now(),
        }
    }

    pub fn read_delay(&self) -> Duration {
        Duration::from_millis(self.read_delay_ms)
    }

    pub fn write_delay(&self) -> Duration {
        Duration::from_millis(self.write_delay_ms)
    }

    /// Load config from .darkwrite/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DarkwriteError::NotDarkwriteDirectory(path.to_path_buf())
            } else {
                DarkwriteError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .darkwrite/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join("config.toml");

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.excerpt_length == 0 {
            return Err(DarkwriteError::Config(
                "excerpt_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
