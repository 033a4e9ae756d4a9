//! File system repository

use crate::error::{JournalyzeError, Result};
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal workspace operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .journalyze/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .journalyze/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .journalyze directory exists
    fn is_initialized(&self) -> bool;

    /// Create .journalyze directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks JOURNALYZE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check JOURNALYZE_ROOT environment variable first
        if let Ok(root_path) = std::env::var("JOURNALYZE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journalyze_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournalyzeError::Config(format!(
                    "JOURNALYZE_ROOT is set to '{}' but no .journalyze directory found. \
                    Run 'journalyze init' in that directory or unset JOURNALYZE_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journalyze_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .journalyze
                    return Err(JournalyzeError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Open the entry store named by the configuration
    pub fn open_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;
        EntryStore::open(self.root.join(config.store))
    }

    /// Check if a path contains a .journalyze directory
    fn has_journalyze_dir(path: &Path) -> bool {
        path.join(".journalyze").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journalyze_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journalyze_dir = self.root.join(".journalyze");

        if journalyze_dir.exists() {
            return Err(JournalyzeError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journalyze_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        // Not initialized yet
        assert!(!repo.is_initialized());

        // Create .journalyze directory
        repo.initialize().unwrap();

        // Now it should be initialized
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".journalyze")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        // Discover from subdirectory should find root
        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_journalyze_dir() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            JournalyzeError::NotJournalDirectory(_) => {}
            _ => panic!("Expected NotJournalDirectory error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.store, config.store);
    }

    #[test]
    fn test_open_store_uses_configured_filename() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        let mut config = Config::new();
        config.store = "diary.csv".to_string();
        repo.save_config(&config).unwrap();

        let store = repo.open_store().unwrap();
        assert_eq!(store.path(), temp.path().join("diary.csv"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_discover_with_journalyze_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("JOURNALYZE_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".journalyze")).unwrap();

        std::env::set_var("JOURNALYZE_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_journalyze_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("JOURNALYZE_ROOT");

        let temp = TempDir::new().unwrap();
        // No .journalyze directory

        std::env::set_var("JOURNALYZE_ROOT", temp.path());

        let result = FileSystemRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            JournalyzeError::Config(msg) => {
                assert!(msg.contains("no .journalyze directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }
}
