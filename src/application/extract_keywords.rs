//! Keyword extraction use case

use crate::domain::entry::EntryId;
use crate::domain::text::extract_keywords;
use crate::domain::EntrySelector;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Keywords extracted from one stored entry
#[derive(Debug, Clone)]
pub struct KeywordOutcome {
    pub id: EntryId,
    pub title: String,
    pub keywords: Vec<String>,
}

/// Service for extracting keywords from a stored entry
pub struct ExtractKeywordsService {
    repository: FileSystemRepository,
}

impl ExtractKeywordsService {
    /// Create a new keyword extraction service
    pub fn new(repository: FileSystemRepository) -> Self {
        ExtractKeywordsService { repository }
    }

    /// Resolve the selector and extract keywords from the entry's content.
    pub fn execute(&self, selector: &str) -> Result<KeywordOutcome> {
        let store = self.repository.open_store()?;
        let (id, entry) = EntrySelector::parse(selector).resolve(store.entries())?;

        let keywords = extract_keywords(&entry.content)?;

        Ok(KeywordOutcome {
            id,
            title: entry.title.clone(),
            keywords,
        })
    }
}
