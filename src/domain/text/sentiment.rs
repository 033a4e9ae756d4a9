//! Lexicon-based sentiment polarity analysis

use crate::domain::text::lexicon::Lexicon;
use crate::domain::text::tokenize::tokenize;
use crate::error::{JournalyzeError, Result};
use std::fmt;

/// Three-way polarity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a polarity score to a label. The comparison is strict and runs
    /// on the unrounded value: any nonzero score, however small, is
    /// Positive or Negative.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        };
        write!(f, "{}", name)
    }
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    /// Mean polarity over recognized words, clamped to [-1.0, 1.0]
    pub score: f64,
    pub label: SentimentLabel,
}

/// Scores text against the polarity lexicon with negation and intensity
/// handling. Tokenization keeps stopwords: negations like "not" are
/// function words and must reach the scorer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    /// How many tokens after a negation word still get sign-flipped
    negation_window: usize,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        SentimentAnalyzer {
            lexicon: Lexicon::new(),
            negation_window: 3,
        }
    }

    /// Analyze content and report its polarity.
    pub fn analyze(&self, content: &str) -> Result<SentimentReport> {
        if content.trim().is_empty() {
            return Err(JournalyzeError::Validation(
                "Content for sentiment analysis cannot be empty".to_string(),
            ));
        }

        let tokens = tokenize(content);

        let mut total = 0.0;
        let mut hits = 0usize;
        let mut modifier = 1.0;
        let mut negation_active = false;
        let mut tokens_since_negation = 0usize;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                tokens_since_negation = 0;
                continue;
            }

            if let Some(multiplier) = self.lexicon.modifier(token) {
                modifier = multiplier;
                continue;
            }

            if let Some(weight) = self.lexicon.weight(token) {
                let mut score = weight * modifier;

                // Invert with damping inside the negation window
                if negation_active && tokens_since_negation < self.negation_window {
                    score = -score * 0.8;
                }

                total += score;
                hits += 1;
                modifier = 1.0;
            }

            if negation_active {
                tokens_since_negation += 1;
                if tokens_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        let score = if hits > 0 {
            (total / hits as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        Ok(SentimentReport {
            score,
            label: SentimentLabel::from_score(score),
        })
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
