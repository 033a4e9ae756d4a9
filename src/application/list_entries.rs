//! List entries use case

use crate::domain::entry::EntryId;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// One row of the entry listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListing {
    pub id: EntryId,
    pub date: NaiveDate,
    pub title: String,
}

/// Service for listing stored entries
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    /// Create a new list entries service
    pub fn new(repository: FileSystemRepository) -> Self {
        ListEntriesService { repository }
    }

    /// List entries newest first, with optional date range and limit.
    /// Range bounds are inclusive.
    pub fn execute(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<EntryListing>> {
        let store = self.repository.open_store()?;

        let mut listings: Vec<EntryListing> = store
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| EntryListing {
                id: idx + 1,
                date: entry.date,
                title: entry.title.clone(),
            })
            .filter(|listing| from.is_none_or(|d| listing.date >= d))
            .filter(|listing| to.is_none_or(|d| listing.date <= d))
            .collect();

        // Newest first; the store is append-ordered, so reversing suffices
        listings.reverse();

        if let Some(n) = limit {
            listings.truncate(n);
        }

        Ok(listings)
    }
}
