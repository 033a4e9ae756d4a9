//! Add entry use case

use crate::domain::entry::EntryId;
use crate::error::Result;
use crate::infrastructure::{EditorSession, EntryStore, FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Confirmation data for a newly stored entry
#[derive(Debug, Clone)]
pub struct AddedEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub title: String,
}

/// Service for adding journal entries
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    /// Create a new add entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    /// Store a new entry. When no content is supplied, the configured
    /// editor is opened to compose it.
    pub fn execute(&self, title: &str, content: Option<String>) -> Result<AddedEntry> {
        let config = self.repository.load_config()?;

        let content = match content {
            Some(text) => text,
            None => {
                let editor = EditorSession::new(config.get_editor());
                editor.compose(self.repository.root())?
            }
        };

        let mut store = EntryStore::open(self.repository.root().join(&config.store))?;
        let id = store.append(title, &content)?;
        let entry = &store.entries()[id - 1];

        Ok(AddedEntry {
            id,
            date: entry.date,
            title: entry.title.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalyzeError;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn init_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        repo
    }

    #[test]
    fn test_add_entry_persists_to_store() {
        let temp = TempDir::new().unwrap();
        let repo = init_repo(&temp);

        let service = AddEntryService::new(repo.clone());
        let added = service
            .execute("Morning", Some("Walked to the lake".to_string()))
            .unwrap();

        assert_eq!(added.id, 1);
        assert_eq!(added.title, "Morning");

        let store = repo.open_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].content, "Walked to the lake");
    }

    #[test]
    fn test_add_entry_assigns_sequential_ids() {
        let temp = TempDir::new().unwrap();
        let service = AddEntryService::new(init_repo(&temp));

        let first = service.execute("One", Some("a".to_string())).unwrap();
        let second = service.execute("Two", Some("b".to_string())).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_add_entry_rejects_empty_title() {
        let temp = TempDir::new().unwrap();
        let service = AddEntryService::new(init_repo(&temp));

        let result = service.execute("  ", Some("content".to_string()));
        assert!(matches!(result, Err(JournalyzeError::Validation(_))));
    }
}
