//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new journal workspace
pub struct InitService;

impl InitService {
    /// Initialize a new journal at the specified path.
    pub fn execute(path: &Path) -> Result<Config> {
        // Create the directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());

        // Initialize .journalyze directory
        repo.initialize()?;

        // Create and save default config
        let config = Config::new();
        repo.save_config(&config)?;

        Ok(config)
    }
}
