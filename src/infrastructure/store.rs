//! CSV-backed entry store
//!
//! Owns the in-memory entry collection and its durable mirror: a CSV file
//! with the header `date,title,content`, one row per entry. That file is
//! the wire format external tooling reads, so column order and header are
//! load-bearing. Every append rewrites the whole file through a temp file
//! plus rename, so a crash mid-write never leaves a truncated store.

use crate::domain::entry::{EntryId, JournalEntry};
use crate::error::{JournalyzeError, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXPECTED_HEADER: [&str; 3] = ["date", "title", "content"];

/// Durable, insertion-ordered collection of journal entries
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<JournalEntry>,
}

impl EntryStore {
    /// Open the store at `path`, hydrating from the CSV file if it exists.
    /// A missing file is an empty journal; an existing file that does not
    /// parse into the expected schema is a corrupt store, surfaced loudly
    /// rather than treated as empty.
    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            Self::read_entries(&path)?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = entries.len(), "opened entry store");

        Ok(EntryStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in insertion order. Ids are 1-based positions.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate, date, persist, and append a new entry. Title and content
    /// must be non-empty after trimming; they are stored as supplied.
    /// Memory is updated only after the rewrite lands, so a failed append
    /// changes nothing.
    pub fn append(&mut self, title: &str, content: &str) -> Result<EntryId> {
        if title.trim().is_empty() {
            return Err(JournalyzeError::Validation(
                "Title cannot be empty".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(JournalyzeError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        let entry = JournalEntry::new(
            Local::now().date_naive(),
            title.to_string(),
            content.to_string(),
        );

        self.persist_with(&entry)?;
        self.entries.push(entry);

        debug!(path = %self.path.display(), id = self.entries.len(), "appended entry");

        Ok(self.entries.len())
    }

    fn read_entries(path: &Path) -> Result<Vec<JournalEntry>> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| Self::classify(path, e))?;

        let header = reader.headers().map_err(|e| Self::classify(path, e))?;
        if header.iter().ne(EXPECTED_HEADER) {
            return Err(JournalyzeError::CorruptStore {
                path: path.to_path_buf(),
                reason: format!(
                    "expected header 'date,title,content', found '{}'",
                    header.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let entry: JournalEntry = row.map_err(|e| Self::classify(path, e))?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Rewrite the whole collection plus `extra` to a temp file in the same
    /// directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn persist_with(&self, extra: &JournalEntry) -> Result<()> {
        let tmp_name = format!(
            "{}.journalyze-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("journals.csv"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let mut writer =
            csv::Writer::from_path(&tmp_path).map_err(|e| Self::classify(&tmp_path, e))?;
        for entry in &self.entries {
            writer
                .serialize(entry)
                .map_err(|e| Self::classify(&tmp_path, e))?;
        }
        writer
            .serialize(extra)
            .map_err(|e| Self::classify(&tmp_path, e))?;
        writer.flush()?;
        drop(writer);

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Map a csv error: underlying I/O problems stay I/O errors, anything
    /// else means the file does not match the schema.
    fn classify(path: &Path, err: csv::Error) -> JournalyzeError {
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => JournalyzeError::Io(io_err),
            _ => JournalyzeError::CorruptStore {
                path: path.to_path_buf(),
                reason,
            },
        }
    }
}
