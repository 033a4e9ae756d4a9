//! Configuration management

use crate::error::{JournalyzeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_store() -> String {
    "journals.csv".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Entry store filename, relative to the journal root
    #[serde(default = "default_store")]
    pub store: String,
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            store: default_store(),
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .journalyze/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".journalyze").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalyzeError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalyzeError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JournalyzeError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .journalyze/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journalyze_dir = path.join(".journalyze");
        let config_path = journalyze_dir.join("config.toml");

        // Ensure .journalyze directory exists
        if !journalyze_dir.exists() {
            fs::create_dir(&journalyze_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JournalyzeError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
