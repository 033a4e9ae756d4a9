//! Show entry use case

use crate::domain::entry::{EntryId, JournalEntry};
use crate::domain::EntrySelector;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for displaying a single stored entry
pub struct ShowEntryService {
    repository: FileSystemRepository,
}

impl ShowEntryService {
    /// Create a new show entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        ShowEntryService { repository }
    }

    /// Resolve a selector (id or title) to its entry.
    pub fn execute(&self, selector: &str) -> Result<(EntryId, JournalEntry)> {
        let store = self.repository.open_store()?;
        let (id, entry) = EntrySelector::parse(selector).resolve(store.entries())?;
        Ok((id, entry.clone()))
    }
}
