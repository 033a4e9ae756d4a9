//! Entry selectors
//!
//! Commands that operate on a stored entry accept either an entry id or a
//! title. An all-digits selector is an id; anything else is matched against
//! titles, resolving to the first entry with that title. Duplicate titles
//! therefore shadow each other - address entries by id to disambiguate.

use crate::domain::entry::{EntryId, JournalEntry};
use crate::error::{JournalyzeError, Result};

/// A parsed reference to a stored entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Id(EntryId),
    Title(String),
}

impl EntrySelector {
    /// Parse a selector string. Ids are 1-based.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<EntryId>() {
                return EntrySelector::Id(id);
            }
        }
        EntrySelector::Title(trimmed.to_string())
    }

    /// Resolve this selector against the collection.
    pub fn resolve<'a>(&self, entries: &'a [JournalEntry]) -> Result<(EntryId, &'a JournalEntry)> {
        match self {
            EntrySelector::Id(id) => {
                if *id >= 1 && *id <= entries.len() {
                    Ok((*id, &entries[*id - 1]))
                } else {
                    Err(JournalyzeError::EntryNotFound(id.to_string()))
                }
            }
            EntrySelector::Title(title) => entries
                .iter()
                .enumerate()
                .find(|(_, entry)| entry.title == *title)
                .map(|(idx, entry)| (idx + 1, entry))
                .ok_or_else(|| JournalyzeError::EntryNotFound(title.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(title: &str, content: &str) -> JournalEntry {
        JournalEntry::new(
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            title.to_string(),
            content.to_string(),
        )
    }

    #[test]
    fn test_parse_digits_as_id() {
        assert_eq!(EntrySelector::parse("3"), EntrySelector::Id(3));
        assert_eq!(EntrySelector::parse(" 12 "), EntrySelector::Id(12));
    }

    #[test]
    fn test_parse_text_as_title() {
        assert_eq!(
            EntrySelector::parse("Morning walk"),
            EntrySelector::Title("Morning walk".to_string())
        );
        // Mixed alphanumerics are a title, not an id
        assert_eq!(
            EntrySelector::parse("Day 3"),
            EntrySelector::Title("Day 3".to_string())
        );
    }

    #[test]
    fn test_resolve_by_id() {
        let entries = vec![entry("First", "a"), entry("Second", "b")];

        let (id, found) = EntrySelector::Id(2).resolve(&entries).unwrap();
        assert_eq!(id, 2);
        assert_eq!(found.title, "Second");
    }

    #[test]
    fn test_resolve_id_out_of_range() {
        let entries = vec![entry("First", "a")];

        assert!(EntrySelector::Id(0).resolve(&entries).is_err());
        assert!(EntrySelector::Id(2).resolve(&entries).is_err());
    }

    #[test]
    fn test_resolve_by_title_first_match_wins() {
        let entries = vec![
            entry("Walk", "first version"),
            entry("Walk", "second version"),
        ];

        let (id, found) = EntrySelector::parse("Walk").resolve(&entries).unwrap();
        assert_eq!(id, 1);
        assert_eq!(found.content, "first version");
    }

    #[test]
    fn test_resolve_title_is_exact_match() {
        let entries = vec![entry("Walk", "a")];

        let result = EntrySelector::parse("walk").resolve(&entries);
        assert!(matches!(result, Err(JournalyzeError::EntryNotFound(_))));
    }

    #[test]
    fn test_resolve_unknown_title() {
        let entries = vec![entry("Walk", "a")];

        match EntrySelector::parse("Run").resolve(&entries) {
            Err(JournalyzeError::EntryNotFound(sel)) => assert_eq!(sel, "Run"),
            other => panic!("Expected EntryNotFound, got {:?}", other),
        }
    }
}
