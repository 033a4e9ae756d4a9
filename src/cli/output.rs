//! Output formatting utilities

use crate::application::{EntryListing, KeywordOutcome, SentimentOutcome};
use crate::domain::entry::{EntryId, JournalEntry};

/// Format a list of entries for display, one row per entry
pub fn format_entry_list(listings: &[EntryListing]) -> String {
    if listings.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for listing in listings {
        output.push_str(&format!(
            "{:>4}  {}  {}\n",
            listing.id,
            listing.date.format("%d-%m-%Y"),
            listing.title
        ));
    }
    output
}

/// Format a single entry with its id, date, and content
pub fn format_entry(id: EntryId, entry: &JournalEntry) -> String {
    format!(
        "#{}  {}  {}\n\n{}\n",
        id,
        entry.date.format("%d-%m-%Y"),
        entry.title,
        entry.content
    )
}

/// Format a sentiment report
pub fn format_sentiment(outcome: &SentimentOutcome) -> String {
    format!(
        "Sentiment: {} (score {:.2})",
        outcome.report.label, outcome.report.score
    )
}

/// Format extracted keywords
pub fn format_keywords(outcome: &KeywordOutcome) -> String {
    if outcome.keywords.is_empty() {
        return "No keywords found".to_string();
    }

    format!("Keywords: {}", outcome.keywords.join(", "))
}
