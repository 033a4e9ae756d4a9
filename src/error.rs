//! Error types for journalyze

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journalyze application
#[derive(Debug, Error)]
pub enum JournalyzeError {
    #[error("Not a journalyze directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("No entry found matching: {0}")]
    EntryNotFound(String),

    #[error("Corrupt journal store {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalyzeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalyzeError::NotJournalDirectory(_) => 2,
            JournalyzeError::Validation(_) => 3,
            JournalyzeError::EntryNotFound(_) => 4,
            JournalyzeError::CorruptStore { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalyzeError::NotJournalDirectory(path) => {
                format!(
                    "Not a journalyze directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'journalyze init' in this directory to create a new journal\n\
                    • Navigate to an existing journalyze directory\n\
                    • Set JOURNALYZE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalyzeError::EntryNotFound(selector) => {
                format!(
                    "No entry found matching: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'journalyze list' to see entry ids and titles\n\
                    • Titles match exactly; the first entry with that title wins\n\
                    • Address an entry by its id to avoid duplicate-title ambiguity",
                    selector
                )
            }
            JournalyzeError::CorruptStore { path, reason } => {
                format!(
                    "Corrupt journal store {}: {}\n\n\
                    The store must be a CSV file with the header 'date,title,content'.\n\
                    Suggestions:\n\
                    • Inspect the file and restore it from a backup\n\
                    • Move the file aside to start with an empty journal",
                    path.display(),
                    reason
                )
            }
            JournalyzeError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: journalyze list --from 17-01-2025 --to 31-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            JournalyzeError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: journalyze config editor 'vim'\n\
                    • Or pass the content directly: journalyze add 'Title' 'Content'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalyzeError
pub type Result<T> = std::result::Result<T, JournalyzeError>;
