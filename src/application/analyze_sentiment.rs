//! Sentiment analysis use case

use crate::domain::entry::EntryId;
use crate::domain::text::{SentimentAnalyzer, SentimentReport};
use crate::domain::EntrySelector;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Sentiment report for one stored entry
#[derive(Debug, Clone)]
pub struct SentimentOutcome {
    pub id: EntryId,
    pub title: String,
    pub report: SentimentReport,
}

/// Service for analyzing the sentiment of a stored entry
pub struct AnalyzeSentimentService {
    repository: FileSystemRepository,
}

impl AnalyzeSentimentService {
    /// Create a new sentiment analysis service
    pub fn new(repository: FileSystemRepository) -> Self {
        AnalyzeSentimentService { repository }
    }

    /// Resolve the selector and score the entry's content.
    pub fn execute(&self, selector: &str) -> Result<SentimentOutcome> {
        let store = self.repository.open_store()?;
        let (id, entry) = EntrySelector::parse(selector).resolve(store.entries())?;

        let report = SentimentAnalyzer::new().analyze(&entry.content)?;

        Ok(SentimentOutcome {
            id,
            title: entry.title.clone(),
            report,
        })
    }
}
