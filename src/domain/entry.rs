//! Journal entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable surrogate identifier for an entry: its 1-based position in the
/// collection. The store is append-only, so positions never shift.
pub type EntryId = usize;

/// One journal record. Field order matches the persisted CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Creation date, assigned from the local clock; immutable afterwards
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, title: String, content: String) -> Self {
        JournalEntry {
            date,
            title,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_date_serializes_as_iso() {
        let entry = JournalEntry::new(
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            "Morning".to_string(),
            "Coffee first".to_string(),
        );

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&entry).unwrap();
        let bytes = writer.into_inner().unwrap();
        let output = String::from_utf8(bytes).unwrap();

        assert!(output.starts_with("date,title,content\n"));
        assert!(output.contains("2025-01-17,Morning,Coffee first"));
    }
}
