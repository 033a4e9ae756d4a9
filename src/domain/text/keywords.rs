//! Frequency-based keyword extraction

use crate::domain::text::tokenize::normalize;
use crate::error::{JournalyzeError, Result};
use std::collections::HashMap;

/// Maximum number of keywords reported per text
pub const KEYWORD_LIMIT: usize = 5;

/// Extract up to [`KEYWORD_LIMIT`] keywords from content, most frequent
/// first. Ties keep first-occurrence order. Fewer surviving tokens than the
/// limit means fewer keywords, no padding.
pub fn extract_keywords(content: &str) -> Result<Vec<String>> {
    if content.trim().is_empty() {
        return Err(JournalyzeError::Validation(
            "Content for keyword extraction cannot be empty".to_string(),
        ));
    }

    Ok(top_by_frequency(&normalize(content), KEYWORD_LIMIT))
}

fn top_by_frequency(tokens: &[String], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (index, token) in tokens.iter().enumerate() {
        let slot = counts.entry(token.as_str()).or_insert((0, index));
        slot.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();

    // Descending frequency, ties broken by first occurrence
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _, _)| token.to_string())
        .collect()
}
