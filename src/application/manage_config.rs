//! Config management use case

use crate::error::{DarkwriteError, Result};
use crate::infrastructure::{Config, Workspace};

const EDITABLE_KEYS: &str = "excerpt_length, read_delay_ms, write_delay_ms";

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "excerpt_length" => Ok(config.excerpt_length.to_string()),
            "read_delay_ms" => Ok(config.read_delay_ms.to_string()),
            "write_delay_ms" => Ok(config.write_delay_ms.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DarkwriteError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, EDITABLE_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "excerpt_length" => {
                let length = parse_number::<usize>(key, value)?;
                if length == 0 {
                    return Err(DarkwriteError::Config(
                        "excerpt_length must be greater than 0".to_string(),
                    ));
                }
                config.excerpt_length = length;
            }
            "read_delay_ms" => config.read_delay_ms = parse_number(key, value)?,
            "write_delay_ms" => config.write_delay_ms = parse_number(key, value)?,
            "created" => {
                return Err(DarkwriteError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DarkwriteError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, EDITABLE_KEYS
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        DarkwriteError::Config(format!(
            "Invalid value for {}: '{}' (expected a non-negative integer)",
            key, value
        ))
    })
}
