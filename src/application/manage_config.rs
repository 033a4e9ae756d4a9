//! Config management use case

use crate::error::{JournalyzeError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "store" => Ok(config.store.clone()),
            "editor" => Ok(config.editor.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalyzeError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: store, editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "store" => {
                if value.trim().is_empty() {
                    return Err(JournalyzeError::Config(
                        "Store filename cannot be empty".to_string(),
                    ));
                }
                config.store = value.to_string();
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(JournalyzeError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalyzeError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: store, editor",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
